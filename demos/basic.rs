use crawlbin::{Engine, RequestTarget};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::new();

    // A mobile crawler gets a 404, everyone else a noindex page with one of
    // two vary headers.
    let path = "/guides/[mobile:response_404][meta_noindex+[vary_cookie,vary_referer]]/";
    let target = RequestTarget::new("http", "crawlbin.com", path);

    let user_agent =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0";

    match engine.respond(user_agent, &target).await {
        Ok(response) => println!("{response}"),
        Err(err) => println!("400 Bad Request: {err}"),
    }
}
