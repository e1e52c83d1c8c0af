pub mod random_round_trips;
pub mod scalar_bounds;
