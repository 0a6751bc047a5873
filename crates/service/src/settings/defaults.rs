//! Hardcoded fallback values for recognized settings keys.
//!
//! Kept textually separate from the store lookup so the defaulting layer is
//! auditable on its own. These cover first-run behavior: an empty store
//! still yields a complete settings map and a usable admin login.

pub const ADMIN_USERNAME_KEY: &str = "admin_username";
pub const ADMIN_PASSWORD_KEY: &str = "admin_password";

pub const DEFAULT_SETTINGS: [(&str, &str); 8] = [
    ("name", "Prisha Enterprises"),
    ("email", "contact@prishaenterprises.in"),
    ("phone", "+91 98765 43210"),
    ("gst", "07AADCP1234F1Z5"),
    ("address", "B-123, Sector 63, Noida, Uttar Pradesh, India - 201301"),
    ("website", "www.prishaenterprises.in"),
    (ADMIN_USERNAME_KEY, "admin"),
    (ADMIN_PASSWORD_KEY, "prisha2024"),
];
