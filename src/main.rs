//! Pokemon lookup TUI

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pokesearch::action::Action;
use pokesearch::api::{PokeApi, API_BASE};
use pokesearch::components::{Component, LookupScreen, LookupScreenProps};
use pokesearch::effect::Effect;
use pokesearch::logging;
use pokesearch::reducer::reducer;
use pokesearch::state::{AppState, SPINNER_TICK_MS};
use pokesearch::tasks;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Look up Pokemon by name or number
#[derive(Parser, Debug)]
#[command(name = "pokesearch")]
#[command(about = "Pokemon lookup with autocomplete, built on tui-dispatch")]
struct Args {
    /// Name or id to look up on start
    #[arg(long, short)]
    name: Option<String>,

    /// PokeAPI base URL
    #[arg(long, default_value = API_BASE)]
    api_base: String,

    /// Directory for pokesearch.log (defaults to the user cache dir)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum PokeComponentId {
    Lookup,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum PokeContext {
    Main,
}

impl EventRoutingState<PokeComponentId, PokeContext> for AppState {
    fn focused(&self) -> Option<PokeComponentId> {
        Some(PokeComponentId::Lookup)
    }

    fn modal(&self) -> Option<PokeComponentId> {
        None
    }

    fn binding_context(&self, _id: PokeComponentId) -> PokeContext {
        PokeContext::Main
    }

    fn default_context(&self) -> PokeContext {
        PokeContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        name,
        api_base,
        log_dir,
        debug: debug_args,
    } = Args::parse();

    let log_dir = log_dir.unwrap_or_else(logging::default_log_dir);
    let _log_guard = logging::init(&log_dir)?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let state = match name {
                Some(name) => AppState::with_query(name),
                None => AppState::default(),
            };
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let api = PokeApi::new(api_base);
    tracing::info!(base_url = api.base_url(), "starting");

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions, api).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct PokeUi {
    screen: LookupScreen,
}

impl PokeUi {
    fn new() -> Self {
        Self {
            screen: LookupScreen::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<PokeComponentId>,
    ) {
        event_ctx.set_component_area(PokeComponentId::Lookup, area);
        let props = LookupScreenProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.screen.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = LookupScreenProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.screen.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
    api: PokeApi,
) -> io::Result<DebugRunOutput<AppState>> {
    let api = Arc::new(api);
    let ui = Rc::new(RefCell::new(PokeUi::new()));
    let mut bus: EventBus<AppState, Action, PokeComponentId, PokeContext> = EventBus::new();
    let keybindings: Keybindings<PokeContext> = Keybindings::new();

    let ui_lookup = Rc::clone(&ui);
    bus.register(PokeComponentId::Lookup, move |event, state| {
        ui_lookup.borrow_mut().handle_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Init),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, &api),
        )
        .await
}

/// Handle effects by spawning tasks. Lookups share one key so a new one
/// aborts whatever is still in flight.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, api: &Arc<PokeApi>) {
    match effect {
        Effect::LoadNameIndex => {
            let api = Arc::clone(api);
            ctx.tasks().spawn("name_index", async move {
                tasks::load_name_index(&api).await
            });
        }
        Effect::Lookup {
            generation,
            identifier,
        } => {
            tracing::debug!(generation, %identifier, "lookup");
            let api = Arc::clone(api);
            ctx.tasks().spawn(TaskKey::new("lookup"), async move {
                tasks::lookup(&api, generation, identifier).await
            });
        }
        Effect::LookupRandom { generation } => {
            tracing::debug!(generation, "random lookup");
            let api = Arc::clone(api);
            ctx.tasks().spawn(TaskKey::new("lookup"), async move {
                tasks::lookup_random(&api, generation).await
            });
        }
    }
}
