use axum::http::Uri;
use axum::{body::Body, routing::get, Router};
use roster_cli::commands;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

fn generate_page_json(page: u32, last_page: u32) -> String {
    let next = if page < last_page {
        format!("\"http://api.example/character?page={}\"", page + 1)
    } else {
        "null".to_string()
    };
    let id = page as i64;
    format!(
        r#"{{
  "info": {{ "count": {last_page}, "pages": {last_page}, "next": {next}, "prev": null }},
  "results": [
    {{
      "id": {id},
      "name": "Character {id}",
      "status": "Alive",
      "species": "Human",
      "type": "",
      "gender": "Female",
      "image": "http://img.example/{id}.jpeg",
      "url": "http://api.example/character/{id}",
      "created": "2017-11-04T18:48:46.250Z"
    }}
  ]
}}"#
    )
}

async fn start_mock_server(
    calls: Arc<Mutex<Vec<String>>>,
) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let app = Router::new().route(
        "/api/character",
        get(move |uri: Uri| {
            let calls = calls.clone();
            async move {
                let query = uri.query().unwrap_or_default().to_string();
                calls.lock().unwrap().push(query.clone());
                let page: u32 = query
                    .strip_prefix("page=")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(1);
                Body::from(generate_page_json(page, 2))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, handle)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_walks_the_cursor_across_pages() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let (addr, server) = start_mock_server(calls.clone()).await;
    let api = format!("http://{addr}/api/");

    tokio::task::spawn_blocking(move || commands::cmd_list(&api, 2))
        .await
        .unwrap()
        .expect("list should succeed against the mock API");

    assert_eq!(calls.lock().unwrap().as_slice(), ["page=1", "page=2"]);

    server.abort();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn favorites_marks_and_unmarks_fetched_records() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let (addr, server) = start_mock_server(calls.clone()).await;
    let api = format!("http://{addr}/api/");

    tokio::task::spawn_blocking(move || {
        commands::cmd_favorites(&api, 2, vec![1, 2], vec![2])
    })
    .await
    .unwrap()
    .expect("favorites should succeed against the mock API");

    assert_eq!(calls.lock().unwrap().len(), 2);

    server.abort();
}
