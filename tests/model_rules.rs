// tests/model_rules.rs
use glam::I64Vec2;
use symbios_rover::{Direction, InputError, Model, RngSource, ScriptedSource};

use Direction::{NegativeX, NegativeY, PositiveX, PositiveY};

#[test]
fn test_model_tags_round_trip() {
    for (tag, model) in Model::ALL.into_iter().enumerate() {
        assert_eq!(model.tag() as usize, tag);
        assert_eq!(Model::try_from(tag as u8), Ok(model));
    }
    assert_eq!(Model::try_from(4u8), Err(InputError::ModelOutOfRange(4)));
    assert_eq!(Model::try_from(-1i64), Err(InputError::ModelOutOfRange(-1)));
}

#[test]
fn test_cyclic_models_ignore_position() {
    let mut rng = ScriptedSource::default();
    for model in [Model::Cyclic, Model::RandomStart] {
        for facing in Direction::ALL {
            for position in [I64Vec2::new(-3, 0), I64Vec2::new(8, -8), I64Vec2::ZERO] {
                assert_eq!(model.turn(facing, position, &mut rng), facing.next_clockwise());
            }
        }
    }
    assert_eq!(rng.consumed(), 0);
}

#[test]
fn test_sign_steered_table() {
    let positive = I64Vec2::new(1, 0);
    let non_positive = I64Vec2::new(0, 5);
    let cases = [
        (PositiveY, positive, NegativeY),
        (PositiveY, non_positive, NegativeX),
        (NegativeX, positive, PositiveX),
        (NegativeX, non_positive, PositiveY),
        (NegativeY, positive, NegativeX),
        (NegativeY, non_positive, PositiveX),
        (PositiveX, positive, NegativeX),
        (PositiveX, non_positive, PositiveY),
    ];

    let mut rng = ScriptedSource::default();
    for (facing, position, want) in cases {
        assert_eq!(
            Model::SignSteered.turn(facing, position, &mut rng),
            want,
            "facing {facing} at x = {}",
            position.x
        );
    }
    assert_eq!(rng.consumed(), 0, "model 1 turns are deterministic");
}

#[test]
fn test_initial_state_ranges() {
    let mut rng = RngSource::seeded(42);
    for _ in 0..500 {
        let (pos, facing) = Model::Cyclic.initial_state(&mut rng);
        assert_eq!((pos, facing), (I64Vec2::ZERO, PositiveY));

        let (pos, facing) = Model::SignSteered.initial_state(&mut rng);
        assert!((-5..5).contains(&pos.x));
        assert_eq!(pos.y, 0);
        assert_eq!(facing, PositiveY);

        let (pos, _) = Model::RandomStart.initial_state(&mut rng);
        assert_eq!(pos.x, 0);
        assert!((-10..10).contains(&pos.y));

        let (pos, _) = Model::RandomTurn.initial_state(&mut rng);
        assert!((-5..5).contains(&pos.x));
        assert!((-5..5).contains(&pos.y));
    }
}

#[test]
fn test_initial_state_draw_order() {
    // x, then y, then facing.
    let mut rng = ScriptedSource::new([0, 9, 3]);
    let (pos, facing) = Model::RandomTurn.initial_state(&mut rng);
    assert_eq!(pos, I64Vec2::new(-5, 4));
    assert_eq!(facing, PositiveX);

    let mut rng = ScriptedSource::new([19, 1]);
    let (pos, facing) = Model::RandomStart.initial_state(&mut rng);
    assert_eq!(pos, I64Vec2::new(0, 9));
    assert_eq!(facing, NegativeX);
}

#[test]
fn test_model_serializes_as_tag() {
    assert_eq!(serde_json::to_string(&Model::RandomTurn).unwrap(), "3");
    assert_eq!(serde_json::from_str::<Model>("1").unwrap(), Model::SignSteered);
    assert!(serde_json::from_str::<Model>("7").is_err());
}
