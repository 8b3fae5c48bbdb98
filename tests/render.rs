use chrono::{Local, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use workout_map::pipeline::render::{marker_popup, summarize};
use workout_map::types::phrases::{pick_phrase, PHRASES};
use workout_map::types::workout::{ActivityInput, Coords, Workout};

fn workout(input: ActivityInput, distance: f64, duration: f64) -> Workout {
    Workout::new(
        Coords::new(51.5072, -0.1276).expect("coords"),
        distance,
        duration,
        input,
        Local
            .with_ymd_and_hms(2024, 10, 3, 6, 0, 0)
            .unwrap()
            .with_timezone(&Utc),
    )
    .expect("workout")
}

#[test]
fn running_summary_lists_pace_and_step_rate() {
    let run = workout(ActivityInput::Running { step_rate: 172 }, 6.0, 32.0);
    let summary = summarize(&run);

    assert_eq!(summary.id, run.id());
    assert_eq!(summary.title, "Running on October 3");
    let rendered: Vec<(String, &str)> = summary
        .details
        .iter()
        .map(|d| (d.value.clone(), d.unit))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("6".to_string(), "km"),
            ("32".to_string(), "min"),
            ("5.3".to_string(), "min/km"),
            ("172".to_string(), "spm"),
        ]
    );
}

#[test]
fn cycling_summary_lists_speed_and_elevation() {
    let ride = workout(ActivityInput::Cycling { elevation_gain: 250.0 }, 10.0, 30.0);
    let line = summarize(&ride).to_string();
    assert!(line.starts_with("Cycling on October 3"));
    assert!(line.contains("20.0 km/h"));
    assert!(line.contains("250 m"));
}

#[test]
fn popup_class_follows_variant() {
    let mut rng = StdRng::seed_from_u64(7);
    let ride = workout(ActivityInput::Cycling { elevation_gain: 0.0 }, 10.0, 30.0);
    let popup = marker_popup(&ride, &mut rng, &PHRASES);
    assert_eq!(popup.css_class, "cycling-popup");
    assert_eq!(popup.location, ride.location());
    assert!(PHRASES.contains(&popup.text.as_str()));
}

#[test]
fn phrase_pick_is_deterministic_for_a_seed() {
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        assert_eq!(pick_phrase(&mut a, &PHRASES), pick_phrase(&mut b, &PHRASES));
    }
}

#[test]
fn phrase_pick_covers_the_list() {
    let mut rng = StdRng::seed_from_u64(1);
    let picked: std::collections::HashSet<&str> =
        (0..500).map(|_| pick_phrase(&mut rng, &PHRASES)).collect();
    assert_eq!(picked.len(), PHRASES.len());
}

#[test]
fn phrase_pick_from_single_entry_list() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(pick_phrase(&mut rng, &["Go!"]), "Go!");
    assert_eq!(pick_phrase(&mut rng, &[]), "Workout");
}
