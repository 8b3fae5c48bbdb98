use workout_map::state::WorkoutCollection;
use workout_map::types::workout::{Coords, Workout};

fn workout(distance: f64) -> Workout {
    Workout::running(Coords::new(48.8566, 2.3522).expect("coords"), distance, 30.0, 168)
        .expect("workout")
}

#[test]
fn push_rejects_a_repeated_id() {
    let first = workout(5.0);
    let mut collection = WorkoutCollection::new();
    assert!(collection.push(first.clone()));
    assert!(!collection.push(first.clone()));
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(first.id()), Some(&first));
}

#[test]
fn from_workouts_keeps_first_occurrence_in_order() {
    let a = workout(3.0);
    let b = workout(7.0);
    let collection = WorkoutCollection::from_workouts([a.clone(), b.clone(), a.clone()]);
    let ids: Vec<_> = collection.iter().map(|w| w.id()).collect();
    assert_eq!(ids, vec![a.id(), b.id()]);
}

#[test]
fn get_mut_reaches_the_stored_workout() {
    let a = workout(3.0);
    let mut collection = WorkoutCollection::from_workouts([a.clone()]);
    collection.get_mut(a.id()).expect("present").record_interaction();
    assert_eq!(collection.get(a.id()).map(|w| w.interaction_count()), Some(1));
    assert!(collection.get(workout(1.0).id()).is_none());
}
