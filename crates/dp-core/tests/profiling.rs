//! End-to-end profiling of DataFrames.

use chrono::NaiveDate;
use dp_core::{ProfileOptions, profile_dataframe};
use dp_model::{BinaryValue, ClassifiedType, StorageKind, VariableStats};
use polars::prelude::*;

fn passengers() -> DataFrame {
    df! {
        "PassengerId" => [1i64, 2, 3, 4, 5, 6, 7, 8],
        "Survived" => [0i64, 1, 1, 1, 0, 0, 0, 1],
        "Name" => ["Braund", "Cumings", "Heikkinen", "Futrelle", "Allen", "Moran", "McCarthy", "Palsson"],
        "Sex" => ["male", "female", "female", "female", "male", "male", "male", "female"],
        "Age" => [Some(22.0), Some(38.0), Some(26.0), Some(35.0), Some(35.0), None, Some(54.0), Some(2.0)],
        "Cabin" => [None, Some("C85"), None, Some("C123"), None, None, Some("E46"), None],
        "Embarked" => [Some("S"), Some("C"), Some("S"), Some("S"), Some("S"), Some("Q"), Some("S"), None],
        "Boarded" => ["2018-07-29", "2018-08-30", "9/16/2018", "2018-08-30", "2018-07-29", "10/1/2018", "2018-07-29", "2018-08-30"],
        "Ship" => ["Titanic"; 8],
        "no_values" => [None::<&str>; 8],
    }
    .unwrap()
}

#[test]
fn profiles_a_mixed_table() {
    let profile = profile_dataframe(&passengers(), &ProfileOptions::default()).unwrap();
    let stats = &profile.table_stats;

    assert_eq!(stats.n_row, 8);
    assert_eq!(stats.n_col, 10);
    // Age 1, Cabin 5, Embarked 1, no_values 8
    assert_eq!(stats.n_missing_cell, 15);
    assert_eq!(stats.n_empty_row, 0);
    assert_eq!(stats.n_duplicated_row, 0);

    let kind = |name: &str| profile.variable(name).unwrap().classified_type();
    assert_eq!(kind("PassengerId"), ClassifiedType::Interval);
    assert_eq!(kind("Survived"), ClassifiedType::Binary);
    assert_eq!(kind("Name"), ClassifiedType::Unique);
    assert_eq!(kind("Sex"), ClassifiedType::Binary);
    assert_eq!(kind("Age"), ClassifiedType::Interval);
    assert_eq!(kind("Cabin"), ClassifiedType::Nominal);
    assert_eq!(kind("Embarked"), ClassifiedType::Nominal);
    assert_eq!(kind("Boarded"), ClassifiedType::Datetime);
    assert_eq!(kind("Ship"), ClassifiedType::Constant);
    assert_eq!(kind("no_values"), ClassifiedType::Empty);

    assert_eq!(stats.type_count(ClassifiedType::Interval), 2);
    assert_eq!(stats.type_count(ClassifiedType::Binary), 2);

    let order: Vec<_> = profile.var_stats.iter().map(|g| g.classified_type).collect();
    assert_eq!(
        order,
        vec![
            ClassifiedType::Interval,
            ClassifiedType::Binary,
            ClassifiedType::Unique,
            ClassifiedType::Nominal,
            ClassifiedType::Datetime,
            ClassifiedType::Constant,
            ClassifiedType::Empty,
        ]
    );

    assert_eq!(profile.conf_matrix.len(), 1);
    let matrix = &profile.conf_matrix[0];
    assert_eq!(matrix.row_variable, "Survived");
    assert_eq!(matrix.column_variable, "Sex");
    assert_eq!(matrix.get("1", "female"), Some(4));
    assert_eq!(matrix.get("0", "male"), Some(4));
}

#[test]
fn computes_type_specific_statistics() {
    let profile = profile_dataframe(&passengers(), &ProfileOptions::default()).unwrap();

    match &profile.variable("Embarked").unwrap().stats {
        VariableStats::Nominal(stats) => {
            let mode = stats.mode.as_ref().unwrap();
            assert_eq!((mode.value.as_str(), mode.freq), ("S", 5));
            assert_eq!(stats.second.as_ref().unwrap().value, "C");
            assert_eq!(stats.third.as_ref().unwrap().value, "Q");
        }
        other => panic!("unexpected stats {other:?}"),
    }

    match &profile.variable("Sex").unwrap().stats {
        VariableStats::Binary(stats) => {
            let value1 = stats.value1.as_ref().unwrap();
            assert_eq!(value1.value, BinaryValue::Observed("male".to_string()));
            assert_eq!(value1.ratio, Some(0.5));
        }
        other => panic!("unexpected stats {other:?}"),
    }

    let boarded = profile.variable("Boarded").unwrap();
    assert_eq!(boarded.storage, StorageKind::Text);
    match &boarded.stats {
        VariableStats::Datetime(stats) => {
            let first = NaiveDate::from_ymd_opt(2018, 7, 29)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            assert_eq!(stats.min, Some(first));
            assert_eq!(stats.day_of_week.total(), 8);
        }
        other => panic!("unexpected stats {other:?}"),
    }

    let age = profile.variable("Age").unwrap();
    assert_eq!(age.base.n_missing, 1);
    match &age.stats {
        VariableStats::Interval(stats) => {
            assert_eq!(stats.min, 2.0);
            assert_eq!(stats.max, 54.0);
            assert_eq!(stats.range, 52.0);
        }
        other => panic!("unexpected stats {other:?}"),
    }
}

#[test]
fn sampling_is_reproducible() {
    let options = ProfileOptions::default().with_sample_size(Some(5)).with_seed(7);
    let first = profile_dataframe(&passengers(), &options).unwrap();
    let second = profile_dataframe(&passengers(), &options).unwrap();

    assert_eq!(first.table_stats.n_row, 5);
    assert_eq!(first.var_summary, second.var_summary);
}

#[test]
fn oversized_sample_profiles_everything() {
    let options = ProfileOptions::default().with_sample_size(Some(1_000));
    let profile = profile_dataframe(&passengers(), &options).unwrap();
    assert_eq!(profile.table_stats.n_row, 8);
}

#[test]
fn profiles_a_full_size_table_with_an_empty_column() {
    const ROWS: usize = 891;
    let ids: Vec<i64> = (1..=ROWS as i64).collect();
    let survived: Vec<i64> = ids.iter().map(|id| id % 3 % 2).collect();
    let class: Vec<i64> = ids.iter().map(|id| id % 3 + 1).collect();
    let names: Vec<String> = ids.iter().map(|id| format!("Passenger {id}")).collect();
    let sex: Vec<&str> = ids
        .iter()
        .map(|id| if id % 2 == 0 { "female" } else { "male" })
        .collect();
    let age: Vec<Option<f64>> = ids
        .iter()
        .map(|id| (id % 5 != 0).then(|| (id % 80) as f64 + 0.5))
        .collect();
    let siblings: Vec<i64> = ids.iter().map(|id| id % 4).collect();
    let parents: Vec<i64> = ids.iter().map(|id| id % 3).collect();
    let tickets: Vec<String> = ids.iter().map(|id| format!("T{}", id % 600)).collect();
    let fare: Vec<f64> = ids.iter().map(|id| (id % 50) as f64 * 1.25).collect();
    let cabin: Vec<Option<String>> = ids
        .iter()
        .map(|id| (id % 4 == 0).then(|| format!("C{}", id % 40)))
        .collect();
    let embarked: Vec<&str> = ids
        .iter()
        .map(|id| ["S", "C", "Q"][(id % 3) as usize])
        .collect();

    let df = df! {
        "PassengerId" => ids,
        "Survived" => survived,
        "Pclass" => class,
        "Name" => names,
        "Sex" => sex,
        "Age" => age,
        "SibSp" => siblings,
        "Parch" => parents,
        "Ticket" => tickets,
        "Fare" => fare,
        "Cabin" => cabin,
        "Embarked" => embarked,
        "Remarks" => vec![None::<&str>; ROWS],
    }
    .unwrap();

    let profile = profile_dataframe(&df, &ProfileOptions::default()).unwrap();
    assert_eq!(profile.table_stats.n_row, ROWS);
    assert_eq!(profile.table_stats.n_col, 13);
    assert_eq!(profile.var_summary.len(), 13);

    let kind = |name: &str| profile.variable(name).unwrap().classified_type();
    assert_eq!(kind("Remarks"), ClassifiedType::Empty);
    assert_eq!(kind("Survived"), ClassifiedType::Binary);
    assert_eq!(kind("Name"), ClassifiedType::Unique);
    assert_eq!(kind("Fare"), ClassifiedType::Interval);
    assert_eq!(kind("Embarked"), ClassifiedType::Nominal);

    let remarks = profile.variable("Remarks").unwrap();
    assert_eq!(remarks.base.n_missing, ROWS);
    assert_eq!(remarks.base.n_unique, None);
    let row = profile
        .var_summary
        .iter()
        .find(|row| row.name == "Remarks")
        .unwrap();
    assert_eq!(row.base.n_unique, None);
}
