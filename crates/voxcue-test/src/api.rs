use voxcue_auth::ClientSettings;

/// Helper for testing the login endpoint using wiremock. Mocks should match on the
/// `/auth/login` path.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before the test completes,
pub async fn start_auth_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        auth_url: format!("{}/auth/login", server.uri()),
    };

    (server, settings)
}
