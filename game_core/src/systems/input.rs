use std::collections::VecDeque;

use hecs::World;

use crate::components::*;

pub const KEY_ESC: u8 = 0x1b;
/// Ctrl+C as delivered by a terminal in raw mode
pub const KEY_INTERRUPT: u8 = 0x03;

/// Non-blocking source of raw key codes
pub trait KeySource {
    /// Next queued key code, or `None` when nothing is pending
    fn next_key(&mut self) -> Option<u8>;
}

impl KeySource for VecDeque<u8> {
    fn next_key(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

/// Vertical direction of a paddle move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Move(Side, Direction),
    Quit,
}

/// What the game loop should do after input was drained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// Decode the key starting with `first`, pulling the rest of an escape
/// sequence from `keys` when needed
///
/// An ESC always consumes the next two codes, whatever they are.
pub fn decode_key<K: KeySource + ?Sized>(first: u8, keys: &mut K) -> Option<KeyCommand> {
    match first {
        b'w' => Some(KeyCommand::Move(Side::Left, Direction::Up)),
        b's' => Some(KeyCommand::Move(Side::Left, Direction::Down)),
        b'q' | KEY_INTERRUPT => Some(KeyCommand::Quit),
        KEY_ESC => {
            let second = keys.next_key();
            let third = keys.next_key();
            match (second, third) {
                (Some(b'['), Some(b'A')) => Some(KeyCommand::Move(Side::Right, Direction::Up)),
                (Some(b'['), Some(b'B')) => Some(KeyCommand::Move(Side::Right, Direction::Down)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Drain every pending key and turn it into paddle intents
///
/// Stops at the first quit key; keys still queued behind it are left unread.
pub fn ingest_keys<K: KeySource + ?Sized>(world: &mut World, keys: &mut K) -> InputOutcome {
    while let Some(key) = keys.next_key() {
        match decode_key(key, &mut *keys) {
            Some(KeyCommand::Move(side, dir)) => set_intent(world, side, dir),
            Some(KeyCommand::Quit) => return InputOutcome::Quit,
            None => {}
        }
    }

    InputOutcome::Continue
}

fn set_intent(world: &mut World, side: Side, dir: Direction) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side != side {
            continue;
        }
        match dir {
            Direction::Up => intent.up = true,
            Direction::Down => intent.down = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, Config};

    fn keys(bytes: &[u8]) -> VecDeque<u8> {
        bytes.iter().copied().collect()
    }

    fn intent(world: &World, side: Side) -> PaddleIntent {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (p, _))| p.side == side)
            .map(|(_e, (_, i))| *i)
            .unwrap()
    }

    fn setup_world() -> World {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);
        world
    }

    #[test]
    fn test_decode_plain_keys() {
        let mut rest = keys(&[]);
        assert_eq!(
            decode_key(b'w', &mut rest),
            Some(KeyCommand::Move(Side::Left, Direction::Up))
        );
        assert_eq!(
            decode_key(b's', &mut rest),
            Some(KeyCommand::Move(Side::Left, Direction::Down))
        );
        assert_eq!(decode_key(b'q', &mut rest), Some(KeyCommand::Quit));
        assert_eq!(decode_key(KEY_INTERRUPT, &mut rest), Some(KeyCommand::Quit));
        assert_eq!(decode_key(b'x', &mut rest), None);
        assert_eq!(decode_key(b'W', &mut rest), None, "Keys are case sensitive");
    }

    #[test]
    fn test_decode_arrow_sequences() {
        let mut rest = keys(b"[A");
        assert_eq!(
            decode_key(KEY_ESC, &mut rest),
            Some(KeyCommand::Move(Side::Right, Direction::Up))
        );

        let mut rest = keys(b"[B");
        assert_eq!(
            decode_key(KEY_ESC, &mut rest),
            Some(KeyCommand::Move(Side::Right, Direction::Down))
        );
    }

    #[test]
    fn test_escape_consumes_two_codes() {
        let mut rest = keys(b"[Cw");
        assert_eq!(decode_key(KEY_ESC, &mut rest), None, "Right arrow is ignored");
        assert_eq!(rest, keys(b"w"));

        let mut rest = keys(b"qs");
        assert_eq!(decode_key(KEY_ESC, &mut rest), None);
        assert!(rest.is_empty(), "A quit key right after ESC is swallowed");
    }

    #[test]
    fn test_lone_escape() {
        let mut rest = keys(&[]);
        assert_eq!(decode_key(KEY_ESC, &mut rest), None);
    }

    #[test]
    fn test_ingest_sets_intents() {
        let mut world = setup_world();
        let mut source = keys(b"w\x1b[B");

        let outcome = ingest_keys(&mut world, &mut source);

        assert_eq!(outcome, InputOutcome::Continue);
        assert_eq!(intent(&world, Side::Left), PaddleIntent { up: true, down: false });
        assert_eq!(intent(&world, Side::Right), PaddleIntent { up: false, down: true });
        assert!(source.is_empty());
    }

    #[test]
    fn test_repeated_keys_are_idempotent() {
        let mut world = setup_world();
        let mut source = keys(b"wwww");

        ingest_keys(&mut world, &mut source);

        assert_eq!(intent(&world, Side::Left), PaddleIntent { up: true, down: false });
    }

    #[test]
    fn test_quit_stops_draining() {
        let mut world = setup_world();
        let mut source = keys(b"wqs");

        let outcome = ingest_keys(&mut world, &mut source);

        assert_eq!(outcome, InputOutcome::Quit);
        assert_eq!(source, keys(b"s"), "Keys after quit stay queued");
    }
}
