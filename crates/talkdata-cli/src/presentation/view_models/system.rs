use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct HealthViewModel {
    pub api_base: String,
    pub status: String,
    pub healthy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableListViewModel {
    pub tables: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExampleListViewModel {
    pub examples: Vec<String>,
}
