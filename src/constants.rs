// Pricing
pub const SHIPPING_FEE: f64 = 15.0;
pub const FREE_SHIPPING_THRESHOLD: f64 = 100.0;
pub const TAX_RATE: f64 = 0.08;
pub const DESIGN_PRICE: f64 = 99.99;

pub const ORDER_ID_PREFIX: &str = "REMO";

// Demo admin credential, not for production use
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_ID: &str = "admin";
pub const ADMIN_NAME: &str = "Administrator";
pub const ADMIN_EMAIL: &str = "admin@remo.com";

// Undelivered notifications kept before the oldest is dropped
pub const MAX_PENDING_NOTIFICATIONS: usize = 50;

// Notification titles
pub const LOGIN_SUCCEEDED: &str = "Welcome back!";
pub const LOGIN_FAILED: &str = "Login Failed";
pub const SIGNUP_SUCCEEDED: &str = "Account Created!";
pub const SIGNUP_FAILED: &str = "Signup Failed";
pub const ADMIN_LOGIN_SUCCEEDED: &str = "Admin Access Granted";
pub const ADMIN_LOGIN_FAILED: &str = "Admin Login Failed";
pub const LOGGED_OUT: &str = "Logged Out";
pub const ITEM_REMOVED: &str = "Item Removed";
pub const CHECKOUT_INCOMPLETE: &str = "Missing Information";
pub const ORDER_PLACED: &str = "Order Placed Successfully!";
