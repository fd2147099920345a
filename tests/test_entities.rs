use beam_shooter::compute::init_state;
use beam_shooter::config::SimConfig;
use beam_shooter::entities::*;
use beam_shooter::geometry::Rect;
use beam_shooter::input::HeldKeys;

#[test]
fn facing_covers_all_eight_deltas() {
    let all = [
        Facing::Right,
        Facing::UpRight,
        Facing::Up,
        Facing::UpLeft,
        Facing::Left,
        Facing::DownLeft,
        Facing::Down,
        Facing::DownRight,
    ];
    for facing in all {
        let (dx, dy) = facing.delta();
        assert_eq!(Facing::from_delta(dx, dy), Some(facing));
    }
    assert_eq!(Facing::from_delta(0, 0), None);
}

#[test]
fn held_keys_delta() {
    let keys = HeldKeys {
        up: true,
        right: true,
        ..HeldKeys::default()
    };
    assert_eq!(keys.delta(), (1, -1));

    let opposed = HeldKeys {
        left: true,
        right: true,
        down: true,
        ..HeldKeys::default()
    };
    assert_eq!(opposed.delta(), (0, 1));
}

#[test]
fn explosion_alternates_every_ten_frames() {
    let at = |life| Explosion {
        rect: Rect::new(0.0, 0.0, 1.0, 1.0),
        life,
    };
    assert_eq!(at(100).frame_index(), 0);
    assert_eq!(at(99).frame_index(), 1);
    assert_eq!(at(90).frame_index(), 1);
    assert_eq!(at(89).frame_index(), 0);
    assert_eq!(at(0).frame_index(), 0);
}

#[test]
fn round_state_clone_is_independent() {
    let original = init_state(&SimConfig::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.actor.health = -1;
    cloned.score = 999;
    cloned.shields.push(Shield {
        rect: Rect::new(0.0, 0.0, 10.0, 10.0),
    });

    assert_eq!(original.actor.health, 2);
    assert_eq!(original.score, 0);
    assert!(original.shields.is_empty());
}
