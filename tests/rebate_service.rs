//! Integration tests running the rebate service over the bundled fixture set.
//!
//! Fixture (`fixtures/rebates.yml`):
//!
//! - `widget` (£10.00) supports every incentive type
//! - `gadget` (£4.00) supports amount per UOM only
//! - `freebie` (no price) supports fixed rate rebates only
//! - `legacy` (£25.00) supports nothing

use std::sync::Arc;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use rebates::prelude::*;

fn service() -> Result<
    (
        Arc<InMemoryStore>,
        StoreRebateService<Arc<InMemoryStore>, Arc<InMemoryStore>>,
    ),
    FixtureError,
> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/rebates.yml");
    let store = Arc::new(Fixture::from_path(path)?.into_store());
    let service = StoreRebateService::new(Arc::clone(&store), Arc::clone(&store));

    Ok((store, service))
}

#[test]
fn fixed_cash_amount_is_recorded() -> TestResult {
    let (store, service) = service()?;

    let result = service.calculate(&CalculateRebateRequest::new(
        "cash-100",
        "widget",
        Decimal::ONE,
    ))?;

    assert_eq!(result.rebate_amount(), Some(&Money::from_minor(100_00, GBP)));

    let records = store.calculation_results()?;

    assert_eq!(records.len(), 1);
    assert_eq!(
        records.first().map(|record| record.rebate.identifier.as_str()),
        Some("cash-100")
    );

    Ok(())
}

#[test]
fn fixed_rate_rebate_is_recorded() -> TestResult {
    let (store, service) = service()?;

    let result = service.calculate(&CalculateRebateRequest::new(
        "rate-5",
        "widget",
        Decimal::from(20),
    ))?;

    assert_eq!(result.rebate_amount(), Some(&Money::from_minor(10_00, GBP)));
    assert_eq!(
        store
            .calculation_results()?
            .first()
            .map(|record| record.amount),
        Some(Money::from_minor(10_00, GBP))
    );

    Ok(())
}

#[test]
fn amount_per_uom_is_recorded() -> TestResult {
    let (store, service) = service()?;

    let result = service.calculate(&CalculateRebateRequest::new(
        "per-uom-250",
        "gadget",
        Decimal::ONE_HUNDRED,
    ))?;

    assert_eq!(result.rebate_amount(), Some(&Money::from_minor(250_00, GBP)));
    assert_eq!(store.calculation_results()?.len(), 1);

    Ok(())
}

#[test]
fn failures_are_never_recorded() -> TestResult {
    let (store, service) = service()?;

    let requests = [
        // Unknown rebate
        CalculateRebateRequest::new("missing", "widget", Decimal::ONE),
        // Unknown product
        CalculateRebateRequest::new("cash-100", "missing", Decimal::ONE),
        // Unsupported incentive
        CalculateRebateRequest::new("cash-100", "gadget", Decimal::ONE),
        CalculateRebateRequest::new("rate-5", "legacy", Decimal::ONE),
        // Zero amount
        CalculateRebateRequest::new("cash-zero", "widget", Decimal::ONE),
        // Zero price
        CalculateRebateRequest::new("rate-5", "freebie", Decimal::ONE),
        // Zero volume
        CalculateRebateRequest::new("rate-5", "widget", Decimal::ZERO),
        CalculateRebateRequest::new("per-uom-250", "gadget", Decimal::ZERO),
        // Negative volume
        CalculateRebateRequest::new("per-uom-250", "gadget", Decimal::NEGATIVE_ONE),
    ];

    for request in &requests {
        let result = service.calculate(request)?;

        assert_eq!(
            result,
            CalculateRebateResult::failure(),
            "expected failure for {request:?}"
        );
    }

    assert!(store.calculation_results()?.is_empty());

    Ok(())
}

#[test]
fn each_success_is_recorded_once() -> TestResult {
    let (store, service) = service()?;
    let request = CalculateRebateRequest::new("per-uom-250", "widget", Decimal::TEN);

    let first = service.calculate(&request)?;
    let second = service.calculate(&request)?;

    assert_eq!(first, second);

    let amounts: Vec<_> = store
        .calculation_results()?
        .into_iter()
        .map(|record| record.amount)
        .collect();

    assert_eq!(
        amounts,
        vec![Money::from_minor(25_00, GBP), Money::from_minor(25_00, GBP)]
    );

    Ok(())
}

#[test]
fn service_is_shareable_across_threads() -> TestResult {
    let (store, service) = service()?;
    let service = Arc::new(service);

    let handles: Vec<_> = (1..=4)
        .map(|volume| {
            let service = Arc::clone(&service);

            std::thread::spawn(move || {
                service.calculate(&CalculateRebateRequest::new(
                    "per-uom-250",
                    "gadget",
                    Decimal::from(volume),
                ))
            })
        })
        .collect();

    for handle in handles {
        let result = handle
            .join()
            .map_err(|_err| std::io::Error::other("calculation thread panicked"))??;

        assert!(result.is_success());
    }

    assert_eq!(store.calculation_results()?.len(), 4);

    Ok(())
}
