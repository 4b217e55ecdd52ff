use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time;

use super::Scheduler;
use super::TimerKey;
use crate::domain::models::Event;

#[tokio::test(start_paused = true)]
async fn it_fires_once_after_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut scheduler = Scheduler::new(tx);

    scheduler.after(
        TimerKey::SuccessBanner,
        Duration::from_secs(3),
        Event::SuccessExpired(1),
    );

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, Event::SuccessExpired(1)));

    time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_replaces_pending_timer_with_same_key() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut scheduler = Scheduler::new(tx);

    scheduler.after(
        TimerKey::SuccessBanner,
        Duration::from_secs(3),
        Event::SuccessExpired(1),
    );
    scheduler.after(
        TimerKey::SuccessBanner,
        Duration::from_secs(3),
        Event::SuccessExpired(2),
    );

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, Event::SuccessExpired(2)));

    time::sleep(Duration::from_secs(10)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_cancels_timers() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut scheduler = Scheduler::new(tx);

    scheduler.after(
        TimerKey::ScrollToResult,
        Duration::from_millis(100),
        Event::ScrollToResult(1),
    );
    assert!(scheduler.is_scheduled(TimerKey::ScrollToResult));
    scheduler.cancel(TimerKey::ScrollToResult);
    assert!(!scheduler.is_scheduled(TimerKey::ScrollToResult));

    time::sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn it_repeats_every_period() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut scheduler = Scheduler::new(tx);
    let start = time::Instant::now();

    scheduler.every(TimerKey::StatusPoll, Duration::from_secs(30), || {
        return Event::StatusPollTick(4);
    });

    for _ in 0..3 {
        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::StatusPollTick(4)));
    }

    assert_eq!(start.elapsed(), Duration::from_secs(90));
}

#[tokio::test(start_paused = true)]
async fn it_cancels_everything_on_drop() {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let mut scheduler = Scheduler::new(tx);
    scheduler.every(TimerKey::StatusPoll, Duration::from_secs(30), || {
        return Event::StatusPollTick(1);
    });
    scheduler.after(
        TimerKey::SuccessBanner,
        Duration::from_secs(3),
        Event::SuccessExpired(1),
    );

    drop(scheduler);
    time::sleep(Duration::from_secs(120)).await;

    assert!(rx.try_recv().is_err());
}
