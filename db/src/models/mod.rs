pub mod agent;
pub mod attendance;
pub mod client;
pub mod correction;
pub mod payroll;
pub mod site;

pub use agent::Entity as Agent;
pub use attendance::Entity as Attendance;
pub use client::Entity as Client;
pub use correction::Entity as Correction;
pub use payroll::Entity as Payroll;
pub use site::Entity as Site;
