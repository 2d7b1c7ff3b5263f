//! Concrete repository implementations.

pub mod advertisement;
pub mod job;
pub mod reservation;
pub mod room;

pub use advertisement::AdvertisementRepository;
pub use job::JobRepository;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;
