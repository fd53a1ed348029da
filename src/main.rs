use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use balcao::client::PedidoClient;
use balcao::config::fetch_config;
use balcao::form::{FormMode, SubmitRequest};
use balcao::list::ListCommand;
use balcao::models::Pedido;
use balcao::tui::event::{self, Action};
use balcao::tui::{self, App, Message};
use balcao::{BalcaoError, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so the alternate screen stays clean;
    // set RUST_LOG to enable them.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = fetch_config()?;
    let client = PedidoClient::new(&config.api.base_url)?;

    let mut terminal = tui::setup_terminal()?;
    let result = run(&mut terminal, client, config.api.base_url).await;
    tui::restore_terminal(&mut terminal)?;
    result
}

/// Message loop: draw, wait for the next message, update, execute any
/// requested network action in a background task.
async fn run(terminal: &mut tui::Tui, client: PedidoClient, api_label: String) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    event::spawn_event_reader(tx.clone());
    event::spawn_tick_timer(tx.clone(), 250);

    let mut app = App::new(api_label);
    execute(Action::List(app.list.load()), client.clone(), tx.clone());

    loop {
        terminal
            .draw(|frame| tui::render(frame, &app))
            .map_err(|e| BalcaoError::Io(e.to_string()))?;

        let Some(message) = rx.recv().await else {
            break;
        };
        if let Some(action) = event::update(&mut app, message) {
            execute(action, client.clone(), tx.clone());
        }
        app.drain_notices();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Runs one network action to completion and reports the result back into
/// the message loop. The task owns its client clone; a result arriving for
/// state that has since changed (collapsed row, closed form) is discarded
/// by `update`.
fn execute(action: Action, client: PedidoClient, tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        let message = match action {
            Action::List(ListCommand::LoadOrders) => {
                Message::OrdersLoaded(client.listar_todos().await)
            }
            Action::List(ListCommand::LoadLineItems {
                pedido_id,
                generation,
            }) => Message::LineItemsLoaded {
                pedido_id,
                generation,
                result: client.listar_produtos(pedido_id).await,
            },
            Action::List(ListCommand::DeleteOrder { pedido_id }) => {
                Message::OrderDeleted(client.deletar(pedido_id).await)
            }
            Action::Submit(request) => Message::OrderSaved(submit(&client, request).await),
        };
        let _ = tx.send(message);
    });
}

/// Dispatches a submit request to create or update.
async fn submit(client: &PedidoClient, request: SubmitRequest) -> Result<Pedido> {
    match request.mode {
        FormMode::Create => client.criar(&request.payload).await,
        FormMode::Edit => {
            let id = request
                .pedido_id
                .ok_or(BalcaoError::Validation)?;
            client.atualizar(id, &request.payload).await
        }
    }
}
