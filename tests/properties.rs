//! Property tests for the monthly capacity and financial series.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use consultant_forecast::calculation::{
    calculate_monthly_financials, calculate_monthly_stats, calculate_net_income,
    calculate_salary_cost,
};
use consultant_forecast::models::{
    AbsenceCategory, AbsenceRecord, Engagement, HolidaySet, SalarySchedule, TaxYearSettings,
};

fn settings_2026() -> TaxYearSettings {
    TaxYearSettings {
        year: 2026,
        state_tax_threshold_annual: Decimal::new(643_000, 0),
        municipality_tax_percent: Decimal::new(30, 0),
        employer_tax_percent: Decimal::new(3142, 2),
    }
}

fn day_of_2026(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Days::new(offset)
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..365).prop_map(day_of_2026)
}

/// Intervals that may start in late 2025 and end in early 2027.
fn absence_strategy() -> impl Strategy<Value = AbsenceRecord> {
    (0u64..400, 0u64..40).prop_map(|(start, length)| {
        let start_date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap() + Days::new(start);
        AbsenceRecord {
            id: format!("abs_{}_{}", start, length),
            start_date,
            end_date: start_date + Days::new(length),
            category: AbsenceCategory::Vacation,
            note: None,
        }
    })
}

fn engagement_strategy() -> impl Strategy<Value = Engagement> {
    (date_strategy(), 0u64..200, 1i64..2000, 0i64..=100, 0i64..=30).prop_map(
        |(start_date, length, rate, allocation, fee)| Engagement {
            id: format!("eng_{}", start_date),
            client_id: "client_001".to_string(),
            name: String::new(),
            start_date,
            end_date: start_date + Days::new(length),
            hourly_rate: Decimal::new(rate, 0),
            allocation_percent: Decimal::new(allocation, 0),
            broker_fee_percent: Decimal::new(fee, 0),
        },
    )
}

proptest! {
    #[test]
    fn workable_days_never_exceed_total(
        absences in prop::collection::vec(absence_strategy(), 0..8),
        holidays in prop::collection::btree_set(date_strategy(), 0..15),
    ) {
        let holidays: HolidaySet = holidays.into_iter().collect();
        let stats = calculate_monthly_stats(2026, &absences, &holidays, &[]).unwrap();

        for month in &stats {
            prop_assert!(month.workable_days <= month.total_work_days);
            prop_assert!(month.absence_days_ui >= month.effective_absence_days);
            prop_assert_eq!(
                month.workable_days,
                month.total_work_days - month.effective_absence_days
            );
        }
    }

    #[test]
    fn duplicated_absences_do_not_inflate_counts(
        absences in prop::collection::vec(absence_strategy(), 1..6),
        holidays in prop::collection::btree_set(date_strategy(), 0..10),
    ) {
        let holidays: HolidaySet = holidays.into_iter().collect();
        let mut doubled = absences.clone();
        doubled.extend(absences.iter().cloned());

        let once = calculate_monthly_stats(2026, &absences, &holidays, &[]).unwrap();
        let twice = calculate_monthly_stats(2026, &doubled, &holidays, &[]).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn absence_days_are_bounded_by_weekdays_in_month(
        absences in prop::collection::vec(absence_strategy(), 0..8),
    ) {
        let stats = calculate_monthly_stats(2026, &absences, &HolidaySet::new(), &[]).unwrap();

        for month in &stats {
            prop_assert!(month.absence_days_ui <= month.total_work_days);
        }
    }

    #[test]
    fn financials_always_have_twelve_ordered_months(
        engagements in prop::collection::vec(engagement_strategy(), 0..4),
        absences in prop::collection::vec(absence_strategy(), 0..4),
        gross in 0i64..120_000,
    ) {
        let salaries = SalarySchedule::uniform(2026, Decimal::new(gross, 0));
        let rows = calculate_monthly_financials(
            &engagements,
            &salaries,
            &absences,
            2026,
            &HolidaySet::new(),
            &settings_2026(),
        )
        .unwrap();

        prop_assert_eq!(rows.len(), 12);
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(&row.month, &format!("2026-{:02}", i + 1));
            prop_assert_eq!(row.profit, row.revenue - row.salary_cost);
            prop_assert!(row.revenue >= Decimal::ZERO);
        }
    }

    #[test]
    fn net_income_and_cost_are_consistent(gross in 0i64..500_000) {
        let gross = Decimal::new(gross, 0);
        let settings = settings_2026();

        let cost = calculate_salary_cost(gross, &settings).unwrap();
        let net = calculate_net_income(gross, &settings).unwrap();

        prop_assert!(cost.total_cost >= gross);
        prop_assert!(net.net_salary <= gross);
        prop_assert!(net.state_tax >= Decimal::ZERO);
        prop_assert_eq!(net.net_salary + net.total_tax, gross);
    }
}
