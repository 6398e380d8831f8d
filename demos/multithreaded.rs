use std::sync::Arc;
use std::thread;

use crawlbin::Engine;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Arc::new(Engine::new());
    let segment =
        "[bot:response_404][mobile:h1_off][tablet:h1_multiple][[response_301,response_302]]";

    let user_agents = [
        "Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)",
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    ];

    let handles: Vec<_> = user_agents
        .into_iter()
        .map(|ua| {
            let e = Arc::clone(&engine);
            thread::spawn(move || {
                let directives = e.resolve(segment, ua).expect("segment is well formed");
                (ua, directives)
            })
        })
        .collect();

    for handle in handles {
        let (ua, directives) = handle.join().expect("thread panicked");
        println!("{directives:?} <- {ua}");
    }
}
