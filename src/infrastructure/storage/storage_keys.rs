pub const USERS_KEY: &str = "remo_users";
pub const SESSION_KEY: &str = "remo_user";
pub const CART_KEY: &str = "remo_cart";
pub const DESIGNS_KEY: &str = "remo_designs";
