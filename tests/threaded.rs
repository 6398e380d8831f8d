use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;

use crawlbin::{Engine, RequestTarget, SeededRandom, Value};

const GOOGLEBOT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
const IPHONE: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
const FIREFOX: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0";

const SEGMENT: &str =
    "[bot:response_404][mobile:h1_off+[vary_cookie,vary_referer]][canonical_self]";

#[test]
fn resolve_across_threads() {
    let engine = Arc::new(Engine::new());

    let mut handles = vec![];

    // Thread 1: crawler -> bot bucket
    let e = Arc::clone(&engine);
    handles.push(thread::spawn(move || e.resolve(SEGMENT, GOOGLEBOT).unwrap()));

    // Thread 2: phone -> mobile bucket with one vary pick
    let e = Arc::clone(&engine);
    handles.push(thread::spawn(move || e.resolve(SEGMENT, IPHONE).unwrap()));

    // Thread 3: desktop browser -> fallback bucket
    let e = Arc::clone(&engine);
    handles.push(thread::spawn(move || e.resolve(SEGMENT, FIREFOX).unwrap()));

    let results: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], vec!["response_404"]);
    assert_eq!(results[1][0], "h1_off");
    assert!(matches!(results[1][1].as_str(), "vary_cookie" | "vary_referer"));
    assert_eq!(results[2], vec!["canonical_self"]);
}

#[test]
fn many_threads_share_seeded_source() {
    let engine = Arc::new(Engine::new().with_random(Arc::new(SeededRandom::new(42))));
    let segment = "[[response_301,response_302,response_303,response_307,response_308]]";

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let e = Arc::clone(&engine);
            thread::spawn(move || {
                (0..250)
                    .map(|_| e.resolve(segment, FIREFOX).unwrap().concat())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let seen: BTreeSet<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    // 2000 draws over five choices; every code shows up.
    assert_eq!(seen.len(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_responses() {
    let engine = Arc::new(Engine::new());

    let tasks: Vec<_> = [(GOOGLEBOT, 404), (IPHONE, 200), (FIREFOX, 200)]
        .into_iter()
        .map(|(ua, status)| {
            let e = Arc::clone(&engine);
            tokio::spawn(async move {
                let target = RequestTarget::new("http", "crawlbin.com", &format!("/{SEGMENT}/"));
                let response = e.respond(ua, &target).await.unwrap();
                (response, status)
            })
        })
        .collect();

    for task in tasks {
        let (response, status) = task.await.unwrap();
        assert_eq!(response.status(), status);
        assert_eq!(
            response.context().get("previous_parts_url"),
            Some(&Value::from("http://crawlbin.com/"))
        );
    }
}
