//! Request types for the costing engine API.
//!
//! This module defines the JSON request structures for the
//! `/api/simulate/contract` and `/api/simulate/job` endpoints. Field names
//! are camelCase on the wire, and every field is optional: absent lists
//! behave as empty and absent scalars as zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ContractAccounts, JobModule, LineItem};

/// Request body for the `/api/simulate/contract` endpoint.
///
/// # Example
///
/// ```
/// use costing_engine::api::ContractCostingRequest;
///
/// let request: ContractCostingRequest = serde_json::from_str(r#"{
///     "materials": [{"name": "Cement", "amount": 5500000}],
///     "workCertified": 18000000
/// }"#).unwrap();
/// assert_eq!(request.materials.len(), 1);
/// assert!(request.wages.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCostingRequest {
    /// Direct material entries.
    #[serde(default)]
    pub materials: Vec<LineItem>,
    /// Direct wage entries.
    #[serde(default)]
    pub wages: Vec<LineItem>,
    /// Direct expense entries.
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    /// Factory/works overhead entries.
    #[serde(default)]
    pub factory_overheads: Vec<LineItem>,
    /// Office/administrative overhead entries.
    #[serde(default)]
    pub admin_overheads: Vec<LineItem>,
    /// Selling & distribution overhead entries.
    #[serde(default)]
    pub selling_overheads: Vec<LineItem>,
    /// Total agreed contract price.
    #[serde(default)]
    pub contract_price: Decimal,
    /// Value of work certified to date.
    #[serde(default)]
    pub work_certified: Decimal,
    /// Cash received against certified work.
    #[serde(default)]
    pub cash_received: Decimal,
    /// Retention percentage withheld by the client.
    #[serde(default)]
    pub retention_percent: Decimal,
    /// Escalation percentage applied to direct materials.
    #[serde(default)]
    pub materials_increase_percent: Decimal,
}

/// Request body for the `/api/simulate/job` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCostingRequest {
    /// The job modules to cost; absent behaves as empty.
    #[serde(default)]
    pub modules: Vec<JobModuleRequest>,
}

/// One job module in a job costing request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobModuleRequest {
    /// Display name for the module.
    #[serde(default)]
    pub name: String,
    /// Direct material entries.
    #[serde(default)]
    pub materials: Vec<LineItem>,
    /// Direct labour entries.
    #[serde(default)]
    pub labour: Vec<LineItem>,
    /// Direct expense entries.
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    /// Factory overhead percentage of prime cost.
    #[serde(default)]
    pub factory_overhead_percent: Option<Decimal>,
    /// Administrative overhead percentage of works cost.
    #[serde(default)]
    pub admin_overhead_percent: Option<Decimal>,
    /// Selling overhead percentage of cost of production.
    #[serde(default)]
    pub selling_overhead_percent: Option<Decimal>,
    /// Profit percentage of total cost.
    #[serde(default)]
    pub profit_percent: Option<Decimal>,
}

impl From<ContractCostingRequest> for ContractAccounts {
    fn from(req: ContractCostingRequest) -> Self {
        ContractAccounts {
            materials: req.materials,
            wages: req.wages,
            expenses: req.expenses,
            factory_overheads: req.factory_overheads,
            admin_overheads: req.admin_overheads,
            selling_overheads: req.selling_overheads,
            contract_price: req.contract_price,
            work_certified: req.work_certified,
            cash_received: req.cash_received,
            retention_percent: req.retention_percent,
            materials_increase_percent: req.materials_increase_percent,
        }
    }
}

impl From<JobModuleRequest> for JobModule {
    fn from(req: JobModuleRequest) -> Self {
        JobModule {
            name: req.name,
            materials: req.materials,
            labour: req.labour,
            expenses: req.expenses,
            factory_overhead_percent: req.factory_overhead_percent,
            admin_overhead_percent: req.admin_overhead_percent,
            selling_overhead_percent: req.selling_overhead_percent,
            profit_percent: req.profit_percent,
        }
    }
}
