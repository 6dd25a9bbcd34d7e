use platecalc_rs::{
    bar_kind::BarKind,
    breakdown::{PlateGroup, breakdown_plates, group_plates},
    calculator::{Calculator, PERCENTAGES},
    denominations::Denominations,
    max_weights::MaxWeights,
    plate::Plate,
    row::Row,
    settings::Settings,
};

#[test]
fn squat_table_at_315() {
    let rows = Calculator::default().table(315.0);
    assert_eq!(rows.len(), PERCENTAGES.len());

    let totals: Vec<f64> = rows.iter().map(Row::total_weight).collect();
    assert_eq!(
        totals,
        vec![315.0, 300.0, 285.0, 270.0, 250.0, 235.0, 220.0, 205.0, 190.0, 175.0, 160.0, 140.0, 125.0]
    );

    let eighty = rows.iter().find(|row| row.percentage() == 80).unwrap();
    assert_eq!(
        eighty.groups(),
        &[
            PlateGroup::new(Plate::new(45.0), 2),
            PlateGroup::new(Plate::new(10.0), 1),
            PlateGroup::new(Plate::new(2.5), 1),
        ]
    );
}

#[test]
fn every_row_loads_exactly_with_standard_plates() {
    let calculator = Calculator::default();
    for max in (50..=700).step_by(7) {
        for row in calculator.table(f64::from(max)) {
            assert!(row.total_weight() >= calculator.barbell_weight());
            assert_eq!(row.residual(), 0.0);
            assert_eq!(
                calculator.barbell_weight() + 2.0 * row.breakdown().loaded(),
                row.total_weight()
            );
        }
    }
}

#[test]
fn empty_max_shows_nothing() {
    let mut settings = Settings::default();
    assert!(Calculator::new(&settings).table(0.0).is_empty());

    settings.set_barbell_weight(BarKind::Womens);
    assert!(Calculator::new(&settings).table(0.0).is_empty());
}

#[test]
fn bar_change_applies_to_every_row() {
    let mut settings = Settings::default();
    settings.set_barbell_weight(BarKind::Womens);
    let calculator = Calculator::new(&settings);

    let row = calculator.row(100.0, 100).unwrap();
    assert_eq!(row.total_weight(), 100.0);
    assert_eq!(row.per_side(), 32.5);
    assert_eq!(
        row.breakdown().plates(),
        &[Plate::new(25.0), Plate::new(5.0), Plate::new(2.5)]
    );

    // 40% of 100 clears a 35 lb bar but not a 45 lb one.
    assert!(calculator.row(100.0, 40).is_some());
    assert!(Calculator::default().row(100.0, 40).is_none());
}

#[test]
fn custom_plates_can_leave_a_residual() {
    let denominations = Denominations::new(&[45.0, 20.0]).unwrap();
    assert!(!denominations.is_exact());

    let calculator = Calculator::with_plates(45.0, denominations);
    let row = calculator.row(225.0, 100).unwrap();
    assert_eq!(row.per_side(), 90.0);
    assert_eq!(row.breakdown().plates(), &[Plate::new(45.0), Plate::new(45.0)]);
    assert_eq!(row.residual(), 0.0);

    let row = calculator.row(175.0, 100).unwrap();
    assert_eq!(row.per_side(), 65.0);
    assert_eq!(row.breakdown().plates(), &[Plate::new(45.0), Plate::new(20.0)]);

    let row = calculator.row(165.0, 100).unwrap();
    assert_eq!(row.per_side(), 60.0);
    assert_eq!(row.breakdown().plates(), &[Plate::new(45.0)]);
    assert_eq!(row.residual(), 15.0);
}

#[test]
fn grouping_matches_breakdown_totals() {
    let standard = Denominations::standard();
    for per_side in [0.0, 2.5, 17.5, 57.5, 102.5, 137.5, 250.0] {
        let plates = breakdown_plates(per_side, &standard);
        let expanded: f64 = group_plates(&plates).iter().map(PlateGroup::weight).sum();
        assert_eq!(expanded, per_side);
    }
}

#[test]
fn huge_max_input_gives_an_empty_table() {
    let max_weight = MaxWeights::parse_input("1e20");
    assert_eq!(max_weight, 0.0);
    assert!(Calculator::default().table(max_weight).is_empty());
}

#[test]
fn largest_accepted_max_still_computes() {
    let max_weight = MaxWeights::parse_input("10000");
    let rows = Calculator::default().table(max_weight);
    assert_eq!(rows.len(), PERCENTAGES.len());
    assert_eq!(rows[0].total_weight(), 10_000.0);
    assert_eq!(rows[0].residual(), 0.0);
}
