//! # Integration Tests
//!
//! 集成测试与端到端测试。
//!
//! 负责：
//! - 合约快照测试
//! - 本地回环 TCP 采集端的 e2e 测试

#[cfg(test)]
mod contract_tests {
    use chrono::{FixedOffset, TimeZone};
    use contracts::{Actor, DeathAttribution, EntityDied, Event, Location, RECORD_TERMINATOR};

    #[test]
    fn test_record_terminator_is_blank_line() {
        assert_eq!(RECORD_TERMINATOR, "\r\n\r\n");
    }

    /// Byte-exact snapshot of one wire record
    #[test]
    fn test_wire_record_snapshot() {
        let now = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2013, 3, 14, 21, 7, 3)
            .unwrap();
        let event = Event::EntityDied(EntityDied {
            victim: Actor::mob("Creeper"),
            attribution: DeathAttribution::Cause("LAVA".to_string()),
            location: Location::new("world", -104.5, 11.0, 230.7, 18000),
        });

        let line = formatter::format_line(&event, &now).unwrap();
        assert_eq!(
            line.as_bytes(),
            b"Thu Mar 14 21:07:03 -0500 2013 action=mob_died victim=creeper killer=lava world=world x=-104.5 y=11.0 z=230.7 game_time=18000\r\n\r\n"
        );
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::Local;
    use contracts::{ChatMessage, Location, PlayerJoined, RelaySettings, RECORD_TERMINATOR};
    use dispatcher::{Relay, TickQueue};
    use tokio::io::AsyncReadExt;
    use tokio::net::{TcpListener, TcpStream};
    use tokio::runtime::Handle;
    use tokio::time::timeout;

    /// Local collector: accepts one connection and reads until it closes
    struct Collector {
        listener: TcpListener,
    }

    impl Collector {
        async fn bind() -> Self {
            Self {
                listener: TcpListener::bind("127.0.0.1:0").await.unwrap(),
            }
        }

        fn entry(&self) -> String {
            format!("127.0.0.1:{}", self.listener.local_addr().unwrap().port())
        }

        async fn accept(&self) -> TcpStream {
            let (stream, _) = timeout(Duration::from_secs(2), self.listener.accept())
                .await
                .expect("collector accept timed out")
                .unwrap();
            stream
        }
    }

    async fn read_all(mut stream: TcpStream) -> String {
        let mut buf = Vec::new();
        timeout(Duration::from_secs(2), stream.read_to_end(&mut buf))
            .await
            .expect("collector read timed out")
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn records(stream: &str) -> Vec<&str> {
        stream
            .split(RECORD_TERMINATOR)
            .filter(|r| !r.is_empty())
            .collect()
    }

    fn spawn() -> Location {
        Location::new("world", 10.5, 64.0, -20.0, 1200)
    }

    fn alice_says(message: &str) -> ChatMessage {
        ChatMessage {
            player: "Alice".to_string(),
            location: spawn(),
            message: message.to_string(),
        }
    }

    /// Chat event -> Dispatcher -> Formatter -> Forwarder -> two TCP collectors
    #[tokio::test]
    async fn test_e2e_chat_reaches_every_collector() {
        let first = Collector::bind().await;
        let second = Collector::bind().await;
        let settings =
            RelaySettings::with_splunks(format!("{}, {}", first.entry(), second.entry()));

        let relay = Relay::start(&settings, &Handle::current(), Arc::new(TickQueue::new())).unwrap();
        let (a, b) = tokio::join!(first.accept(), second.accept());
        relay.wait_for_connections().await;
        assert_eq!(relay.forwarder().pool().active_count(), 2);

        relay.dispatcher().on_chat_message(alice_says("hello world"));
        relay.stop().await;

        for received in [read_all(a).await, read_all(b).await] {
            let records = records(&received);
            assert_eq!(records.len(), 1, "stream: {received:?}");
            assert!(records[0].contains("action=chat player=Alice world=world x=10.5 y=64.0 z=-20.0 game_time=1200 message=\"hello world\""));
            assert!(received.ends_with(RECORD_TERMINATOR));
        }
    }

    /// One unreachable collector must not affect the others
    #[tokio::test]
    async fn test_e2e_unreachable_collector_is_skipped() {
        let live = Collector::bind().await;
        let dead_entry = {
            let dead = Collector::bind().await;
            dead.entry()
        };
        let settings = RelaySettings::with_splunks(format!(
            "{dead_entry}, not-a-sink, {}",
            live.entry()
        ));

        let relay = Relay::start(&settings, &Handle::current(), Arc::new(TickQueue::new())).unwrap();
        let stream = live.accept().await;
        relay.wait_for_connections().await;
        assert_eq!(relay.forwarder().pool().active_count(), 1);

        relay.dispatcher().on_player_joined(PlayerJoined {
            player: "Alice".to_string(),
            location: spawn(),
        });
        relay.dispatcher().on_chat_message(alice_says("still here"));
        relay.stop().await;

        let received = read_all(stream).await;
        let records = records(&received);
        assert_eq!(records.len(), 2);
        assert!(records[0].contains("action=player_connect player=Alice"));
        assert!(records[1].contains("message=\"still here\""));
    }

    /// A collector that goes away keeps failing quietly; the others keep receiving
    #[tokio::test]
    async fn test_e2e_broken_collector_is_isolated() {
        let flaky = Collector::bind().await;
        let steady = Collector::bind().await;
        let settings =
            RelaySettings::with_splunks(format!("{}, {}", flaky.entry(), steady.entry()));

        let relay = Relay::start(&settings, &Handle::current(), Arc::new(TickQueue::new())).unwrap();
        let (flaky_stream, steady_stream) = tokio::join!(flaky.accept(), steady.accept());
        relay.wait_for_connections().await;

        let flaky_entry = flaky.entry();
        drop(flaky_stream);
        drop(flaky);
        tokio::time::sleep(Duration::from_millis(50)).await;

        for i in 0..20 {
            relay
                .dispatcher()
                .on_chat_message(alice_says(&format!("message {i}")));
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        tokio::time::sleep(Duration::from_millis(50)).await;

        // The broken sink stays in the active set and keeps counting failures
        let pool = relay.forwarder().pool();
        assert_eq!(pool.active_count(), 2);
        let (_, flaky_metrics) = pool
            .metrics()
            .into_iter()
            .find(|(name, _)| *name == flaky_entry)
            .unwrap();
        assert!(flaky_metrics.failures > 0, "metrics: {flaky_metrics:?}");
        assert_eq!(flaky_metrics.writes + flaky_metrics.failures, 20);
        relay.stop().await;

        let received = read_all(steady_stream).await;
        assert_eq!(records(&received).len(), 20);
    }

    /// Identical events in a row reach the collector once
    #[tokio::test]
    async fn test_e2e_duplicate_is_suppressed() {
        let collector = Collector::bind().await;
        let settings = RelaySettings::with_splunks(collector.entry());

        let relay = Relay::start(&settings, &Handle::current(), Arc::new(TickQueue::new())).unwrap();
        let stream = collector.accept().await;
        relay.wait_for_connections().await;

        // Pin the clock so both "hi" lines carry the same timestamp
        let now = Local::now().fixed_offset();
        let fixed = relay.dispatcher().clone().with_clock(Arc::new(move || now));

        fixed.on_chat_message(alice_says("hi"));
        fixed.on_chat_message(alice_says("hi"));
        fixed.on_chat_message(alice_says("bye"));
        relay.stop().await;

        let received = read_all(stream).await;
        assert_eq!(records(&received).len(), 2);
    }
}
