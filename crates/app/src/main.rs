use cafepos_menu::MenuStore;
use cafepos_orders::OrderSession;
use cafepos_storage::JsonOrderStore;

fn main() {
    cafepos_observability::init();

    // The storage path is the only configuration: env override, else the
    // working directory, matching the original deployment.
    let store = match std::env::var("CAFEPOS_ORDER_FILE") {
        Ok(path) => JsonOrderStore::new(path),
        Err(_) => match JsonOrderStore::in_current_dir() {
            Ok(store) => store,
            Err(err) => {
                tracing::error!(%err, "cannot determine order file path");
                std::process::exit(1);
            }
        },
    };
    tracing::info!(path = %store.path().display(), "order store ready");

    let session = OrderSession::new(store);
    let menu = MenuStore::standard_menu();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(err) = cafepos_app::run(session, menu, stdin.lock(), stdout.lock()) {
        tracing::error!(%err, "session ended with an error");
        std::process::exit(1);
    }
}
