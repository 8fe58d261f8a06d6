pub mod blocked_slots;
pub mod bookings;
pub mod schedule_configs;
pub mod services;
