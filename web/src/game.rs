use tictactoe_core as game;
use yew::prelude::*;

const INVALID_MOVE_MESSAGE: &str = "Invalid move";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Mounted,
    Play(game::Coord2),
    Reset,
}

fn cell_text(cell: game::Cell) -> &'static str {
    match cell.player() {
        Some(player) => player.symbol(),
        None => "",
    }
}

fn cell_mark_class(cell: game::Cell) -> &'static str {
    use game::Cell::*;
    match cell {
        Empty => "empty",
        X => "mark-x",
        O => "mark-o",
    }
}

fn banner_text(outcome: game::Outcome) -> Option<String> {
    use game::Outcome::*;
    match outcome {
        InProgress => None,
        Win(player) => Some(format!("{} Wins!", player)),
        Draw => Some("DRAW".to_string()),
    }
}

fn banner_class(outcome: game::Outcome) -> Option<&'static str> {
    use game::{Outcome::*, Player};
    match outcome {
        InProgress => None,
        Win(Player::X) => Some("win-x"),
        Win(Player::O) => Some("win-o"),
        Draw => Some("draw"),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    cell: game::Cell,
    #[prop_or_default]
    disabled: bool,
    callback: Callback<game::Coord2>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        cell,
        disabled,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        format!("row-col-{}-{}", row, col),
        cell_mark_class(cell)
    );

    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("({}, {}) click", row, col);
        callback.emit((row, col));
    });

    html! {
        <button {class} {onclick} {disabled}>{cell_text(cell)}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct OutcomeProps {
    outcome: game::Outcome,
    turn: game::Player,
}

/// Result banner once the game is over, whose turn it is otherwise.
#[function_component(OutcomeBanner)]
fn outcome_banner(props: &OutcomeProps) -> Html {
    match (banner_text(props.outcome), banner_class(props.outcome)) {
        (Some(text), Some(class)) => html! {
            <span class={classes!("outcome", class)}>{text}</span>
        },
        _ => html! {
            <span class="turn">{format!("{} to move", props.turn)}</span>
        },
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ResetProps {
    onclick: Callback<MouseEvent>,
}

#[function_component(ResetButton)]
fn reset_button(props: &ResetProps) -> Html {
    html! {
        <button class="reset" title="New game" aria-label="New game" onclick={props.onclick.clone()}>
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M8 20v1.93a.5.5 0 0 1-.82.38l-4.12-3.43A.5.5 0 0 1 3.38 18H18a2 2 0 0 0 2-2V8h2v8a4 4 0 0 1-4 4H8zm8-17.93a.5.5 0 0 1 .82-.38l4.12 3.43a.5.5 0 0 1-.32.88H6a2 2 0 0 0-2 2v8H2V8a4 4 0 0 1 4-4h10V2.07z"/>
            </svg>
        </button>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    ready: bool,
    game: game::GameState,
}

impl GameView {
    fn new() -> Self {
        Self {
            ready: false,
            game: game::GameState::new(),
        }
    }

    /// Replaces the current snapshot with the one after the move, if accepted.
    fn try_move(&mut self, coords: game::Coord2) -> game::Result<()> {
        self.game = self.game.apply_move(coords)?;
        Ok(())
    }

    fn play(&mut self, coords: game::Coord2) -> bool {
        use game::GameError::*;

        match self.try_move(coords) {
            Ok(()) => {
                if let Some(text) = banner_text(self.game.outcome()) {
                    log::debug!("game over: {}", text);
                }
                true
            }
            Err(InvalidMove) => {
                log::debug!("invalid move at {:?}", coords);
                gloo::dialogs::alert(INVALID_MOVE_MESSAGE);
                false
            }
            Err(AlreadyEnded) => false,
            Err(err @ (InvalidCoords | InvalidBoardShape)) => {
                log::error!("move at {:?} failed: {}", coords, err);
                false
            }
        }
    }

    fn reset(&mut self) -> bool {
        let fresh = game::GameState::new();
        let changed = self.game != fresh;
        self.game = fresh;
        changed
    }

    fn is_playable(&self) -> bool {
        !self.game.is_finished()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::new()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::trace!("msg: {:?}", msg);
        match msg {
            Mounted => !std::mem::replace(&mut self.ready, true),
            Play(coords) => self.play(coords),
            Reset => {
                log::debug!("new game");
                self.reset()
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Mounted);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.ready {
            return html! {};
        }

        let disabled = !self.is_playable();
        let outcome = self.game.outcome();
        let turn = self.game.turn();
        let callback = ctx.link().callback(Msg::Play);
        let cb_reset = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Reset
        });

        html! {
            <div class="tictactoe">
                <h1>{"Tic-Tac-Toe"}</h1>
                <div class={classes!("board", self.is_playable().then_some("playable"))}>
                    {
                        for game::iter_coords().map(|(row, col)| {
                            let cell = self.game.board()[(row, col)];
                            let callback = callback.clone();
                            html! {
                                <CellView {row} {col} {cell} {disabled} {callback}/>
                            }
                        })
                    }
                </div>
                <nav>
                    <OutcomeBanner {outcome} {turn}/>
                    <ResetButton onclick={cb_reset}/>
                </nav>
            </div>
        }
    }
}
