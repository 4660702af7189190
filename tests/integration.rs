//! Comprehensive integration tests for the costing engine.
//!
//! This test suite covers both simulation endpoints end to end:
//! - The worked construction-contract scenario
//! - The worked IT job-module scenario
//! - Leniency for missing fields and non-numeric amounts
//! - The notional-profit floor and the division guard
//! - The alternative profit-basis policy
//! - Error cases for malformed payloads

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use costing_engine::api::{AppState, create_router};
use costing_engine::config::{CostingPolicy, NotionalProfitBasis, PolicyLoader};
use costing_engine::models::{ContractCostingResult, JobCostingResult};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_default_router() -> Router {
    create_router(AppState::default())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn post_contract(router: Router, body: Value) -> (StatusCode, ContractCostingResult) {
    let (status, bytes) = post(router, "/api/simulate/contract", body).await;
    assert_eq!(status, StatusCode::OK);
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_job(router: Router, body: Value) -> (StatusCode, JobCostingResult) {
    let (status, bytes) = post(router, "/api/simulate/job", body).await;
    assert_eq!(status, StatusCode::OK);
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// The reference construction-contract scenario.
fn contract_scenario() -> Value {
    json!({
        "materials": [
            {"name": "Cement", "amount": 5500000},
            {"name": "Steel", "amount": 1500000}
        ],
        "wages": [{"name": "Masons", "amount": 1500000}],
        "expenses": [{"name": "Machinery Hire", "amount": 1000000}],
        "factoryOverheads": [{"name": "Site Power", "amount": 200000}],
        "adminOverheads": [{"name": "Office Staff", "amount": 150000}],
        "sellingOverheads": [{"name": "Marketing", "amount": 50000}],
        "contractPrice": 25000000,
        "workCertified": 18000000,
        "cashReceived": 15000000,
        "retentionPercent": 10,
        "materialsIncreasePercent": 5
    })
}

// =============================================================================
// Contract endpoint
// =============================================================================

#[tokio::test]
async fn test_contract_scenario_breakdown() {
    let (_, result) = post_contract(create_default_router(), contract_scenario()).await;

    let b = &result.breakdown;
    assert_eq!(b.direct_materials, decimal("7000000"));
    assert_eq!(b.direct_wages, decimal("1500000"));
    assert_eq!(b.direct_expenses, decimal("1000000"));
    assert_eq!(b.prime_cost, decimal("9500000"));
    assert_eq!(b.factory_overhead_total, decimal("200000"));
    assert_eq!(b.works_cost, decimal("9700000"));
    assert_eq!(b.admin_overhead_total, decimal("150000"));
    assert_eq!(b.cost_of_production, decimal("9850000"));
    assert_eq!(b.selling_overhead_total, decimal("50000"));
    assert_eq!(b.cost_of_sales, decimal("9900000"));
}

#[tokio::test]
async fn test_contract_scenario_metrics() {
    let (_, result) = post_contract(create_default_router(), contract_scenario()).await;

    let m = &result.contract_metrics;
    assert_eq!(m.material_escalation, decimal("350000"));
    assert_eq!(m.notional_profit, decimal("8150000"));
    assert_eq!(m.retention_money, decimal("1800000"));
    // round(8,150,000 * 2/3 * 15,000,000/18,000,000)
    assert_eq!(m.recognised_profit, decimal("4527778"));
}

#[tokio::test]
async fn test_contract_empty_payload_yields_zeros() {
    let (_, result) = post_contract(create_default_router(), json!({})).await;

    assert_eq!(result.breakdown.prime_cost, Decimal::ZERO);
    assert_eq!(result.breakdown.cost_of_sales, Decimal::ZERO);
    assert_eq!(result.contract_metrics.recognised_profit, Decimal::ZERO);
}

#[tokio::test]
async fn test_contract_non_numeric_amounts_coerce_to_zero() {
    let body = json!({
        "materials": [
            {"name": "Cement", "amount": 100},
            {"name": "Unpriced", "amount": "pending"},
            {"name": "Null", "amount": null},
            {"name": "Missing"}
        ]
    });

    let (_, result) = post_contract(create_default_router(), body).await;
    assert_eq!(result.breakdown.direct_materials, decimal("100"));
}

#[tokio::test]
async fn test_contract_overrun_reports_zero_notional_profit() {
    let mut body = contract_scenario();
    body["workCertified"] = json!(1000000);

    let (_, result) = post_contract(create_default_router(), body).await;
    assert_eq!(result.contract_metrics.notional_profit, Decimal::ZERO);
    assert_eq!(result.contract_metrics.recognised_profit, Decimal::ZERO);
}

#[tokio::test]
async fn test_contract_zero_work_certified_is_defined() {
    let mut body = contract_scenario();
    body["workCertified"] = json!(0);

    let (status, result) = post_contract(create_default_router(), body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.contract_metrics.retention_money, Decimal::ZERO);
    assert_eq!(result.contract_metrics.recognised_profit, Decimal::ZERO);
}

#[tokio::test]
async fn test_contract_price_basis_policy() {
    let policy = CostingPolicy {
        notional_profit_basis: NotionalProfitBasis::ContractPriceLessWorksCost,
        ..CostingPolicy::default()
    };
    let router = create_router(AppState::new(policy));

    let (_, result) = post_contract(router, contract_scenario()).await;
    // 25,000,000 - 9,700,000
    assert_eq!(result.contract_metrics.notional_profit, decimal("15300000"));
}

#[tokio::test]
async fn test_contract_stage_chain_is_monotone() {
    let (_, result) = post_contract(create_default_router(), contract_scenario()).await;

    let b = &result.breakdown;
    assert!(b.cost_of_sales >= b.cost_of_production);
    assert!(b.cost_of_production >= b.works_cost);
    assert!(b.works_cost >= b.prime_cost);
}

// =============================================================================
// Job endpoint
// =============================================================================

#[tokio::test]
async fn test_job_scenario_two_modules() {
    let body = json!({
        "modules": [
            {
                "name": "Attendance",
                "materials": [{"name": "License", "amount": 45000}],
                "labour": [{"name": "Dev Team", "amount": 300000}],
                "expenses": [{"name": "Hosting", "amount": 50000}],
                "factoryOverheadPercent": 10,
                "adminOverheadPercent": 5,
                "profitPercent": 20
            },
            {
                "name": "FeeMgmt",
                "materials": [{"name": "License", "amount": 55000}],
                "labour": [{"name": "Dev Team", "amount": 350000}],
                "expenses": [{"name": "APIs", "amount": 60000}],
                "factoryOverheadPercent": 10,
                "adminOverheadPercent": 5,
                "profitPercent": 20
            }
        ]
    });

    let (_, result) = post_job(create_default_router(), body).await;

    assert_eq!(result.breakdown.len(), 2);

    let attendance = &result.breakdown[0];
    assert_eq!(attendance.name, "Attendance");
    assert_eq!(attendance.prime_cost, decimal("395000"));
    assert_eq!(attendance.factory_overhead, decimal("39500"));
    assert_eq!(attendance.works_cost, decimal("434500"));
    assert_eq!(attendance.admin_overhead, decimal("21725"));
    assert_eq!(attendance.cost_of_production, decimal("456225"));
    assert_eq!(attendance.total_cost, decimal("456225"));
    assert_eq!(attendance.profit, decimal("91245"));
    assert_eq!(attendance.selling_price, decimal("547470"));

    let fee_mgmt = &result.breakdown[1];
    assert_eq!(fee_mgmt.name, "FeeMgmt");
    assert_eq!(fee_mgmt.prime_cost, decimal("465000"));

    assert_eq!(
        result.grand_total,
        attendance.total_cost + fee_mgmt.total_cost
    );
    assert_eq!(
        result.grand_price,
        attendance.selling_price + fee_mgmt.selling_price
    );
}

#[tokio::test]
async fn test_job_module_without_percentages_prices_at_prime_cost() {
    let body = json!({
        "modules": [{
            "name": "Reporting",
            "labour": [{"name": "Dev", "amount": 250000}]
        }]
    });

    let (_, result) = post_job(create_default_router(), body).await;
    let module = &result.breakdown[0];

    assert_eq!(module.prime_cost, decimal("250000"));
    assert_eq!(module.total_cost, decimal("250000"));
    assert_eq!(module.selling_price, decimal("250000"));
}

#[tokio::test]
async fn test_job_zero_percent_equals_absent_percent() {
    let absent = json!({
        "modules": [{"name": "m", "labour": [{"name": "l", "amount": 1000}]}]
    });
    let zero = json!({
        "modules": [{
            "name": "m",
            "labour": [{"name": "l", "amount": 1000}],
            "factoryOverheadPercent": 0,
            "adminOverheadPercent": 0,
            "sellingOverheadPercent": 0,
            "profitPercent": 0
        }]
    });

    let (_, absent_result) = post_job(create_default_router(), absent).await;
    let (_, zero_result) = post_job(create_default_router(), zero).await;

    assert_eq!(absent_result.breakdown, zero_result.breakdown);
}

#[tokio::test]
async fn test_job_empty_modules_yield_zero_grand_totals() {
    let (_, result) = post_job(create_default_router(), json!({"modules": []})).await;
    assert!(result.breakdown.is_empty());
    assert_eq!(result.grand_total, Decimal::ZERO);
    assert_eq!(result.grand_price, Decimal::ZERO);

    let (_, result) = post_job(create_default_router(), json!({})).await;
    assert!(result.breakdown.is_empty());
    assert_eq!(result.grand_total, Decimal::ZERO);
}

#[tokio::test]
async fn test_job_module_order_is_preserved() {
    let names = ["Gamma", "Alpha", "Beta"];
    let modules: Vec<Value> = names
        .iter()
        .map(|n| json!({"name": n, "labour": [{"name": "l", "amount": 100}]}))
        .collect();

    let (_, result) = post_job(create_default_router(), json!({"modules": modules})).await;

    let returned: Vec<&str> = result.breakdown.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(returned, names);
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_json_returns_400() {
    let response = create_default_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/simulate/contract")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_non_object_payload_returns_400() {
    let (status, bytes) = post(create_default_router(), "/api/simulate/contract", json!([1, 2])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_INPUT");
}

#[tokio::test]
async fn test_non_array_list_field_returns_400() {
    let (status, _) = post(
        create_default_router(),
        "/api/simulate/contract",
        json!({"materials": {"name": "Cement"}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        create_default_router(),
        "/api/simulate/job",
        json!({"modules": 42}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Shipped configuration
// =============================================================================

#[tokio::test]
async fn test_shipped_policy_matches_default_behavior() {
    let loader = PolicyLoader::load("./config/costing").expect("Failed to load policy");
    let router = create_router(AppState::new(loader.into_policy()));

    let (_, result) = post_contract(router, contract_scenario()).await;
    assert_eq!(result.contract_metrics.recognised_profit, decimal("4527778"));
}
