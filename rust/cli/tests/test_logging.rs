use powerpoker_cli::commands::{SimOptions, handle_sim_command};
use powerpoker_cli::logging::TestLogSubscriber;
use tracing::Level;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn sim_emits_game_lifecycle_events() {
    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());

    tracing::subscriber::with_default(registry, || {
        let opts = SimOptions {
            games: 2,
            seed: Some(5),
            placer: "first".to_string(),
            output: None,
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(opts, &mut out, &mut err).unwrap();
    });

    let entries = subscriber.entries();
    let starts = entries
        .iter()
        .filter(|e| e.level == Level::INFO && e.message.contains("new game"))
        .count();
    let ends: Vec<_> = entries
        .iter()
        .filter(|e| e.level == Level::INFO && e.message.contains("game over"))
        .collect();
    assert_eq!(starts, 2);
    assert_eq!(ends.len(), 2);
    assert!(ends[0].field("score").is_some());
    assert!(entries.iter().any(|e| e.message.contains("simulation finished")));
    assert!(
        entries
            .iter()
            .any(|e| e.level == Level::DEBUG && e.message.contains("phase change"))
    );
}
