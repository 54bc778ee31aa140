//! Database Models

// Auth
pub mod rol;
pub mod usuario;

// Adoption Domain
pub mod mascota;
pub mod persona;
pub mod raza;
pub mod solicitud;

// Re-exports
pub use mascota::{Mascota, MascotaCreate, MascotaReplace, MascotaUpdate};
pub use persona::{Persona, PersonaCreate, PersonaReplace, PersonaUpdate};
pub use raza::{Raza, RazaCreate, RazaUpdate};
pub use rol::{Rol, RolCreate, RolUpdate};
pub use solicitud::{SolicitudAdopcion, SolicitudCreate, SolicitudUpdate};
pub use usuario::{Usuario, UsuarioCreate, UsuarioReplace, UsuarioUpdate};
