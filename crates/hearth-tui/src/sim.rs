//! In-process simulated transport.
//!
//! Feeds the runtime a scripted chat session over the same channels a real
//! transport would use: an initial user-list snapshot, periodic flaired
//! messages and broadcasts, and an echo of every outgoing line as an
//! own-nick message. No network; the task runs until stopped or until the
//! runtime drops its channel ends.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use hearth_app::ChatEvent;
use hearth_core::{Broadcast, ChatMessage, ChatUser, UserList};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::sync::mpsc;

/// Scripted cast: nick and feature keys.
const CAST: &[(&str, &[&str])] = &[
    ("Polecat", &[]),
    ("stitch", &["admin"]),
    ("marigold", &["vip"]),
    ("chantbot", &["bot"]),
    ("wren", &["flair3"]),
    ("tamsin", &["flair1", "flair9"]),
    ("oakley", &["flair2"]),
    ("breeze", &[]),
    ("juniper", &[]),
];

const LINES: &[&str] = &[
    "anyone catch the speedrun last night",
    "lol",
    "the bridge section is pure pain",
    "brb tea",
    "new emote when",
    "that clip was unreal",
    "gg",
];

const BROADCASTS: &[&str] = &["stream going live in 10", "subathon weekend starts friday"];

const TRAFFIC_INTERVAL: Duration = Duration::from_millis(2500);

/// Outgoing lines longer than this are refused with an inline send error.
const MAX_LINE_LEN: usize = 240;

/// Handle to the running simulation task.
pub struct SimHandle {
    abort_handle: tokio::task::AbortHandle,
}

impl SimHandle {
    /// Stop the simulation.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Channels and handle for a spawned simulation.
pub struct Sim {
    /// Incoming chat events for the runtime.
    pub events: mpsc::Receiver<ChatEvent>,
    /// Outgoing message lines from the runtime.
    pub outbound: mpsc::Sender<String>,
    /// Handle to stop the task.
    pub handle: SimHandle,
}

/// Spawn the simulated transport.
pub fn spawn(self_nick: String) -> Sim {
    let (event_tx, event_rx) = mpsc::channel::<ChatEvent>(32);
    let (outbound_tx, mut outbound_rx) = mpsc::channel::<String>(32);

    let handle = tokio::spawn(async move {
        let mut rng = StdRng::from_os_rng();

        let users = cast_users();
        let snapshot = UserList { count: users.len(), users };
        if event_tx.send(ChatEvent::UserList(snapshot)).await.is_err() {
            return;
        }

        let welcome = ChatMessage {
            nick: "Polecat".to_string(),
            features: Vec::new(),
            timestamp_ms: now_ms(),
            text: format!("hey {self_nick}, welcome in"),
        };
        if event_tx.send(ChatEvent::Message(welcome)).await.is_err() {
            return;
        }

        let mut traffic = tokio::time::interval(TRAFFIC_INTERVAL);
        let mut ticks: u32 = 0;

        loop {
            tokio::select! {
                _ = traffic.tick() => {
                    ticks = ticks.wrapping_add(1);
                    if event_tx.send(scripted_event(&mut rng, ticks)).await.is_err() {
                        break;
                    }
                }

                maybe_line = outbound_rx.recv() => {
                    let Some(line) = maybe_line else { break };
                    let event = if line.len() > MAX_LINE_LEN {
                        ChatEvent::SendError { text: "message too long".to_string() }
                    } else {
                        ChatEvent::Message(ChatMessage {
                            nick: self_nick.clone(),
                            features: Vec::new(),
                            timestamp_ms: now_ms(),
                            text: line,
                        })
                    };
                    if event_tx.send(event).await.is_err() {
                        break;
                    }
                }
            }
        }
    });

    Sim {
        events: event_rx,
        outbound: outbound_tx,
        handle: SimHandle { abort_handle: handle.abort_handle() },
    }
}

/// Pick the next scripted event: mostly messages, with the occasional
/// broadcast and user-list refresh mixed in.
fn scripted_event(rng: &mut StdRng, ticks: u32) -> ChatEvent {
    if ticks % 12 == 0 {
        return ChatEvent::Broadcast(Broadcast {
            timestamp_ms: now_ms(),
            text: BROADCASTS[rng.random_range(0..BROADCASTS.len())].to_string(),
        });
    }

    if ticks % 7 == 0 {
        let mut users = cast_users();
        let cut = rng.random_range(0..users.len());
        users.rotate_left(cut);
        return ChatEvent::UserList(UserList { count: users.len(), users });
    }

    let (nick, features) = CAST[rng.random_range(0..CAST.len())];
    ChatEvent::Message(ChatMessage {
        nick: nick.to_string(),
        features: features.iter().map(|f| (*f).to_string()).collect(),
        timestamp_ms: now_ms(),
        text: LINES[rng.random_range(0..LINES.len())].to_string(),
    })
}

fn cast_users() -> Vec<ChatUser> {
    CAST.iter()
        .map(|(nick, features)| ChatUser {
            nick: (*nick).to_string(),
            features: features.iter().map(|f| (*f).to_string()).collect(),
        })
        .collect()
}

fn now_ms() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_millis() as i64)
}
