pub mod resolve_address;

pub use resolve_address::{AddressResolution, ResolutionOutcome, ResolveAddressUseCase};
