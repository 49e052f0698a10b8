pub mod account;
pub mod cart;
pub mod checkout;
pub mod design;
pub mod notification;
