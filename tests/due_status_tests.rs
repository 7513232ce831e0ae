//! Tests de integración del motor de mantenimiento
//!
//! Escenarios completos contra la API pública: evaluación, barridos,
//! planificación y confirmación de borradores sobre un parque en memoria.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use fleet_maintenance::{
    draft_record, evaluate, inspection_alerts, plan_vehicle, sweep_fleet, sweep_vehicle, DueTier,
    EngineConfig, FleetDueReport, FleetStore, InterventionType, MaintenanceRecord,
    RecordDraftInput, Vehicle, VehicleStatus,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn vehicle(odometer: i64) -> Vehicle {
    Vehicle {
        id: Uuid::new_v4(),
        brand: "Peugeot".to_string(),
        model: "308".to_string(),
        year: 2020,
        license_plate: "AB-123-CD".to_string(),
        driver_id: None,
        odometer,
        status: VehicleStatus::Active,
        out_of_service_date: None,
        last_maintenance: date(2024, 1, 15),
        next_technical_inspection: date(2024, 12, 15),
    }
}

fn intervention(description: &str, km: Option<i64>, months: Option<u32>) -> InterventionType {
    InterventionType {
        id: Uuid::new_v4(),
        description: description.to_string(),
        category: "Moteur".to_string(),
        distance_interval_km: km,
        time_interval_months: months,
    }
}

fn record(
    vehicle_id: Uuid,
    service_date: NaiveDate,
    label: &str,
    odometer: Option<i64>,
) -> MaintenanceRecord {
    MaintenanceRecord {
        id: Uuid::new_v4(),
        vehicle_id,
        garage_id: None,
        date: service_date,
        type_label: label.to_string(),
        intervention_type_ids: Vec::new(),
        cost: Decimal::new(25000, 2),
        description: String::new(),
        odometer_at_service: odometer,
    }
}

fn config() -> EngineConfig {
    EngineConfig::default()
}

// Escenario A: intervalo 10 000 km, odómetro 9 500, sin historial
#[test]
fn scenario_distance_due_soon_without_history() {
    let vehicle = vehicle(9_500);
    let oil_change = intervention("MO VIDANGE MOTEUR", Some(10_000), None);

    let result = evaluate(&vehicle, &oil_change, &[], date(2024, 6, 1), &config());
    assert_eq!(result.distance_remaining_km, Some(500));
    assert_eq!(result.tier, DueTier::DueSoon);
}

// Escenario B: mismo tipo, odómetro 10 500 → 500 km de retard
#[test]
fn scenario_distance_overdue_by_500() {
    let vehicle = vehicle(10_500);
    let oil_change = intervention("MO VIDANGE MOTEUR", Some(10_000), None);

    let result = evaluate(&vehicle, &oil_change, &[], date(2024, 6, 1), &config());
    assert_eq!(result.distance_remaining_km, Some(-500));
    assert_eq!(result.tier, DueTier::Overdue);
}

// Escenario C: 12 meses, último servicio hace 11 meses → ~30 días
#[test]
fn scenario_time_due_soon_one_month_before() {
    let vehicle = vehicle(20_000);
    let clim = intervention("CHARGE CLIM PM", None, Some(12));
    let history = vec![record(vehicle.id, date(2023, 7, 1), "Charge clim", None)];

    let result = evaluate(&vehicle, &clim, &history, date(2024, 6, 1), &config());
    assert_eq!(result.days_remaining, Some(30));
    assert_eq!(result.tier, DueTier::DueSoon);
}

// Escenario D: km ok, tiempo vencido → el más restrictivo gana
#[test]
fn scenario_combined_takes_most_restrictive() {
    let vehicle = vehicle(15_000);
    let tyres = intervention("CHANGEMENT DES PNEUS", Some(60_000), Some(48));
    let history = vec![record(
        vehicle.id,
        date(2020, 1, 1),
        "Changement des pneus",
        Some(10_000),
    )];

    let result = evaluate(&vehicle, &tyres, &history, date(2024, 6, 1), &config());
    assert!(result.distance_remaining_km.unwrap() > 0);
    assert!(result.days_remaining.unwrap() <= 0);
    assert_eq!(result.tier, DueTier::Overdue);
}

// Escenario E: sin intervalos → ok, excluida del barrido, retenida en el
// reporte completo
#[test]
fn scenario_unschedulable_entry() {
    let fleet = vec![vehicle(250_000)];
    let unschedulable = intervention("CONTROLE VISUEL", None, None);
    let catalog = vec![unschedulable];

    let due = sweep_fleet(&fleet, &catalog, &[], date(2024, 6, 1), &config());
    assert!(due.is_empty());

    let report = FleetDueReport::build(&fleet, &catalog, &[], date(2024, 6, 1), &config());
    assert_eq!(report.upcoming.len(), 1);
    assert!(report.upcoming[0].distance_remaining_km.is_none());
    assert!(report.upcoming[0].days_remaining.is_none());
}

#[test]
fn history_resolution_uses_latest_match() {
    let vehicle = vehicle(45_000);
    let oil_change = intervention("VIDANGE MOTEUR", Some(10_000), None);
    let history = vec![
        record(vehicle.id, date(2023, 8, 20), "Vidange", Some(38_000)),
        record(vehicle.id, date(2024, 1, 15), "Vidange et filtres", Some(42_000)),
    ];

    let result = evaluate(&vehicle, &oil_change, &history, date(2024, 6, 1), &config());
    let last = result.last_service.unwrap();
    assert_eq!(last.date, date(2024, 1, 15));
    assert_eq!(last.odometer, Some(42_000));
    // 10 000 − (45 000 − 42 000) = 7 000
    assert_eq!(result.distance_remaining_km, Some(7_000));
}

#[test]
fn distance_tier_never_improves_as_odometer_grows() {
    let oil_change = intervention("MO VIDANGE MOTEUR", Some(10_000), None);
    let today = date(2024, 6, 1);

    let mut previous_priority = 0;
    for odometer in [0, 5_000, 9_000, 9_999, 10_000, 20_000] {
        let result = evaluate(&vehicle(odometer), &oil_change, &[], today, &config());
        assert!(
            result.priority() >= previous_priority,
            "la severidad bajó al subir el odómetro a {}",
            odometer
        );
        previous_priority = result.priority();
    }
}

#[test]
fn time_tier_never_improves_as_time_advances() {
    let vehicle = vehicle(20_000);
    let clim = intervention("CHARGE CLIM PM", None, Some(12));
    let history = vec![record(vehicle.id, date(2023, 7, 1), "Charge clim", None)];

    let mut previous_priority = 0;
    for today in [
        date(2023, 8, 1),
        date(2024, 5, 1),
        date(2024, 6, 15),
        date(2024, 7, 1),
        date(2024, 9, 1),
    ] {
        let result = evaluate(&vehicle, &clim, &history, today, &config());
        assert!(
            result.priority() >= previous_priority,
            "la severidad bajó al avanzar la fecha a {}",
            today
        );
        previous_priority = result.priority();
    }
}

#[test]
fn evaluate_twice_yields_identical_output() {
    let vehicle = vehicle(9_500);
    let tyres = intervention("CHANGEMENT DES PNEUS", Some(60_000), Some(48));
    let history = vec![record(vehicle.id, date(2022, 3, 1), "Pneus", Some(5_000))];
    let today = date(2024, 6, 1);

    let first = evaluate(&vehicle, &tyres, &history, today, &config());
    let second = evaluate(&vehicle, &tyres, &history, today, &config());
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn combination_table_over_all_tier_pairs() {
    // Ejes independientes: km fijo por odómetro, tiempo fijo por fecha del
    // último servicio. Severidad global = máximo de las dos.
    let today = date(2024, 6, 1);

    // (odómetro para tier km con intervalo 10 000, fecha base para tier
    // tiempo con intervalo 12 meses)
    let distance_inputs = [
        (1_000, DueTier::Ok),
        (9_500, DueTier::DueSoon),
        (12_000, DueTier::Overdue),
    ];
    let time_inputs = [
        (date(2024, 5, 1), DueTier::Ok),
        (date(2023, 7, 1), DueTier::DueSoon),
        (date(2023, 1, 1), DueTier::Overdue),
    ];

    for (odometer, expected_km_tier) in distance_inputs {
        for (baseline, expected_time_tier) in time_inputs {
            let vehicle = vehicle(odometer);
            let both = intervention("CHANGEMENT DES PNEUS", Some(10_000), Some(12));
            let history = vec![record(vehicle.id, baseline, "Changement des pneus", Some(0))];

            let result = evaluate(&vehicle, &both, &history, today, &config());
            assert_eq!(
                result.tier,
                expected_km_tier.max(expected_time_tier),
                "odómetro {} / base {}",
                odometer,
                baseline
            );
        }
    }
}

#[test]
fn full_planning_flow_on_store() {
    let mut store = FleetStore::default();
    let mut fleet_vehicle = vehicle(45_000);
    fleet_vehicle.last_maintenance = date(2024, 1, 15);
    let vehicle_id = fleet_vehicle.id;
    store.insert_vehicle(fleet_vehicle);

    let oil_change = intervention("VIDANGE MOTEUR+FILTRE A HUILE", Some(10_000), Some(12));
    let brake_pads = intervention("PLAQUETTE AV -LA PAIRE", Some(30_000), None);
    let shock_absorbers = intervention("AMORTISSEURS AR - LA PAIRE", Some(100_000), None);
    store.insert_intervention_type(oil_change.clone());
    store.insert_intervention_type(brake_pads.clone());
    store.insert_intervention_type(shock_absorbers.clone());

    store
        .add_record(record(vehicle_id, date(2024, 1, 15), "Vidange moteur", Some(42_000)))
        .unwrap();

    let today = date(2024, 6, 1);

    // Vidange: 10 000 − 3 000 = 7 000 km ok. Plaquettes: sin historial,
    // 30 000 − 45 000 vencida. Amortisseurs: lejos.
    let planned = store.plan_for_vehicle(vehicle_id, today).unwrap();
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].intervention_type_id, brake_pads.id);
    assert_eq!(planned[0].tier, DueTier::Overdue);

    // Confirmar la selección: borrador → registro → refresco del vehículo
    let extra = RecordDraftInput {
        date: today,
        garage_id: Some(Uuid::new_v4()),
        cost: Decimal::new(18000, 2),
        odometer: Some(45_200),
        notes: "Remplacement plaquettes".to_string(),
    };
    let snapshot_vehicle = store.vehicle(vehicle_id).unwrap().clone();
    let draft = draft_record(&snapshot_vehicle, &planned, store.catalog(), &extra).unwrap();
    assert_eq!(draft.type_label, "PLAQUETTE AV -LA PAIRE");

    let (record_id, warnings) = store.commit_draft(draft).unwrap();
    assert!(warnings.is_empty());
    assert!(store.records().iter().any(|r| r.id == record_id));
    assert_eq!(store.vehicle(vehicle_id).unwrap().odometer, 45_200);

    // El enlace explícito resuelve sin heurística: la plaquette ya no está
    // due en la siguiente pasada
    let replanned = store.plan_for_vehicle(vehicle_id, today).unwrap();
    assert!(replanned
        .iter()
        .all(|r| r.intervention_type_id != brake_pads.id));
}

#[test]
fn fleet_sweep_skips_out_of_service_vehicles() {
    let mut active = vehicle(95_000);
    active.last_maintenance = date(2024, 1, 15);
    let mut parked = vehicle(95_000);
    parked.status = VehicleStatus::OutOfService;
    parked.out_of_service_date = Some(date(2024, 3, 1));

    let catalog = vec![intervention("BOUGIES ALLUMAGE", Some(30_000), None)];
    let results = sweep_fleet(
        &[active.clone(), parked.clone()],
        &catalog,
        &[],
        date(2024, 6, 1),
        &config(),
    );

    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.vehicle_id == active.id));
}

#[test]
fn vehicle_sweep_orders_by_priority_with_stable_ties() {
    let vehicle = vehicle(9_500);
    let catalog = vec![
        intervention("AMORTISSEURS AR - LA PAIRE", Some(100_000), None),
        intervention("MO VIDANGE MOTEUR", Some(10_000), None),
        intervention("MO PLAQUETTE AV -LA PAIRE", Some(9_000), None),
    ];

    let results = sweep_vehicle(&vehicle, &catalog, &[], date(2024, 6, 1), &config());
    let priorities: Vec<u8> = results.iter().map(|r| r.priority()).collect();
    assert_eq!(priorities, vec![3, 2, 1]);

    let due_only = plan_vehicle(&vehicle, &catalog, &[], date(2024, 6, 1), &config());
    assert_eq!(due_only.len(), 2);
}

#[test]
fn inspection_alerts_are_separate_from_interval_engine() {
    let mut soon = vehicle(45_000);
    soon.next_technical_inspection = date(2024, 6, 20);
    let mut far = vehicle(45_000);
    far.next_technical_inspection = date(2025, 6, 20);

    let alerts = inspection_alerts(&[soon.clone(), far], date(2024, 6, 1), &config());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].vehicle_id, soon.id);
    assert_eq!(alerts[0].days_until_inspection, 19);
}
