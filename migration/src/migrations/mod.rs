pub mod m20260301_000001_create_agents;
pub mod m20260301_000002_create_clients;
pub mod m20260301_000003_create_sites;
pub mod m20260301_000004_create_attendances;
pub mod m20260301_000005_create_corrections;
pub mod m20260301_000006_create_payrolls;
