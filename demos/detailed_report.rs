use std::sync::Arc;

use crawlbin::{Engine, SeededRandom};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let engine = Engine::new().with_random(Arc::new(SeededRandom::new(2024)));

    let segment =
        "[all:vary_user_agent][bot:response_410][googlebot:[canonical_self,canonical_home]][h1_off]";
    let user_agent = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

    let report = engine
        .resolve_detailed(segment, user_agent)
        .expect("segment is well formed");

    println!("{report}");
    println!();
    println!("User agent: {}", report.user_agent());
    println!("Matched categories: {:?}", report.matched());
    println!("Candidate pool: {:?}", report.pool());
    println!("Directives: {:?}", report.directives());
    println!("Duration: {:?}", report.duration());
}
