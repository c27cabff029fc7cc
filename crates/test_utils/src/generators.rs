//! Fake-data generators

use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::LawyerId;
use domain_compensation::Lawyer;

/// A random client display name
pub fn client_name() -> String {
    Name().fake()
}

/// A random lawyer display name
pub fn lawyer_name() -> String {
    format!("Adv. {}", Name().fake::<String>())
}

/// A roster lawyer with a generated name
pub fn lawyer() -> Lawyer {
    Lawyer::new(LawyerId::new(), lawyer_name())
}
