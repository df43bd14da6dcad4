use crate::{error, server::AppState, spotify, success};

pub async fn auth(state: AppState) {
    match spotify::auth::auth(state).await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("{}", e),
    }
}

pub async fn serve(state: AppState) {
    if let Err(e) = crate::server::start_api_server(state).await {
        error!("Server stopped: {}", e);
    }
}
