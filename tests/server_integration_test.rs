use cafe_api::{CafeServer, Catalog, ServerSettings};

fn ephemeral() -> ServerSettings {
    ServerSettings {
        port: 0,
        ..ServerSettings::default()
    }
}

#[tokio::test]
async fn test_end_to_end_over_tcp() {
    let server = CafeServer::new(Catalog::builtin())
        .spawn(&ephemeral())
        .await
        .unwrap();
    let base = format!("http://{}", server.local_addr());

    let response = reqwest::get(format!("{}/cafe?city=tula&count=2", base))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "Кофе с молоком,Вкусности");

    let response = reqwest::get(format!("{}/cafe?city=omsk", base))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(response.text().await.unwrap().trim(), "unknown city");

    let response = reqwest::get(format!("{}/cafe?city=tula&count=na", base))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(response.text().await.unwrap().trim(), "incorrect count");

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_stop_releases_the_server() {
    let server = CafeServer::new(Catalog::builtin())
        .spawn(&ephemeral())
        .await
        .unwrap();
    let addr = server.local_addr();

    server.stop().await.unwrap();

    let result = reqwest::get(format!("http://{}/cafe?city=tula", addr)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_bind_failure_is_a_system_error() {
    let first = CafeServer::new(Catalog::builtin())
        .spawn(&ephemeral())
        .await
        .unwrap();

    let taken = ServerSettings {
        port: first.local_addr().port(),
        ..ServerSettings::default()
    };
    let err = match CafeServer::new(Catalog::builtin()).spawn(&taken).await {
        Ok(_) => panic!("binding an occupied port should fail"),
        Err(e) => e,
    };
    assert_eq!(err.exit_code(), 2);

    first.stop().await.unwrap();
}
