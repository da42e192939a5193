//! In-memory reference data for unit tests

use std::collections::BTreeMap;

use visio_types::{DamageRange, DamageVector};

use crate::model::{BandwidthRange, HardwareRecord, LeafProfile, RecordBody, Software, TransportationMean};
use crate::repository::ReferenceRepository;

pub(crate) struct InMemoryRepository {
    hardware: BTreeMap<String, HardwareRecord>,
    software: BTreeMap<String, Software>,
    transport: BTreeMap<String, TransportationMean>,
    network: DamageRange,
}

impl ReferenceRepository for InMemoryRepository {
    fn find_hardware(&self, name: &str) -> Option<&HardwareRecord> {
        self.hardware.get(name)
    }

    fn find_software(&self, name: &str) -> Option<&Software> {
        self.software.get(name)
    }

    fn find_transportation_mean(&self, name: &str) -> Option<&TransportationMean> {
        self.transport.get(name)
    }

    fn network_intensity(&self) -> &DamageRange {
        &self.network
    }

    fn all_hardware(&self) -> Vec<&HardwareRecord> {
        self.hardware.values().collect()
    }

    fn all_software(&self) -> Vec<&Software> {
        self.software.values().collect()
    }

    fn all_transportation_means(&self) -> Vec<&TransportationMean> {
        self.transport.values().collect()
    }
}

fn leaf(
    lifetime: f64,
    operating_time_per_day: f64,
    embodied: Option<DamageRange>,
    operating: Option<DamageRange>,
    standby: Option<DamageRange>,
) -> LeafProfile {
    LeafProfile {
        embodied,
        operating,
        standby,
        lifetime,
        operating_time_per_day,
        known_operating_time: None,
        known_standby_time: None,
    }
}

fn record(name: &str, body: RecordBody) -> HardwareRecord {
    HardwareRecord {
        name: name.to_string(),
        french: None,
        is_size_dependent: false,
        default_size: None,
        size_unit: None,
        body,
    }
}

fn composite(name: &str, children: &[&str]) -> HardwareRecord {
    record(
        name,
        RecordBody::Composite(children.iter().map(|c| c.to_string()).collect()),
    )
}

pub(crate) fn repository() -> InMemoryRepository {
    let mut hardware = BTreeMap::new();
    let mut add = |r: HardwareRecord| {
        hardware.insert(r.name.clone(), r);
    };

    add(record(
        "DESKTOP",
        RecordBody::Leaf(leaf(
            5.0,
            7.0,
            Some(DamageRange::new(
                DamageVector::new(2.0e-4, 40.0, 250.0, 3000.0),
                DamageVector::new(3.0e-4, 60.0, 350.0, 4200.0),
            )),
            Some(DamageRange::fixed(DamageVector::new(1.0e-8, 0.002, 0.01, 0.3))),
            Some(DamageRange::fixed(DamageVector::new(1.0e-9, 0.0002, 0.001, 0.03))),
        )),
    ));

    let mut cable = record(
        "POWER_CABLE_ONE_METER",
        RecordBody::Leaf(leaf(
            20.0,
            7.0,
            Some(DamageRange::fixed(DamageVector::new(1.0e-7, 0.05, 0.4, 6.0))),
            None,
            None,
        )),
    );
    cable.is_size_dependent = true;
    cable.default_size = Some(1.0);
    cable.size_unit = Some("m".to_string());
    add(cable);

    add(record(
        "TV_SCREEN_BASE",
        RecordBody::Leaf(leaf(
            8.0,
            1.5,
            Some(DamageRange::new(
                DamageVector::new(2.0e-6, 1.0, 12.0, 150.0),
                DamageVector::new(3.0e-6, 1.5, 18.0, 210.0),
            )),
            None,
            None,
        )),
    ));

    let mut screen = record(
        "TV_SCREEN",
        RecordBody::Leaf(leaf(
            8.0,
            1.5,
            Some(DamageRange::new(
                DamageVector::new(1.0e-6, 0.4, 5.0, 60.0),
                DamageVector::new(1.5e-6, 0.6, 7.0, 90.0),
            )),
            Some(DamageRange::fixed(DamageVector::new(2.0e-9, 0.0004, 0.002, 0.05))),
            Some(DamageRange::fixed(DamageVector::new(1.0e-10, 0.00002, 0.0001, 0.002))),
        )),
    );
    screen.is_size_dependent = true;
    screen.size_unit = Some("inch".to_string());
    add(screen);

    add(record("NO_DATA", RecordBody::Leaf(leaf(1.0, 1.0, None, None, None))));
    add(composite("TV", &["TV_SCREEN_BASE", "TV_SCREEN"]));
    add(composite("DUAL_SCREEN", &["TV_SCREEN", "TV_SCREEN"]));
    add(composite("ROOM", &["TV", "POWER_CABLE_ONE_METER", "DESKTOP"]));

    let mut software = BTreeMap::new();
    software.insert(
        "SKYPE".to_string(),
        Software {
            name: "SKYPE".to_string(),
            french: Some("Skype".to_string()),
            file_size: Some(65.8),
            download_speed: BTreeMap::from([
                (2, BandwidthRange::new(30.0, 1050.0)),
                (3, BandwidthRange::new(512.0, 2000.0)),
                (5, BandwidthRange::new(2000.0, 4000.0)),
                (7, BandwidthRange::new(4000.0, 8000.0)),
            ]),
        },
    );
    software.insert(
        "JITSI".to_string(),
        Software {
            name: "JITSI".to_string(),
            french: None,
            file_size: None,
            download_speed: BTreeMap::new(),
        },
    );

    let mut transport = BTreeMap::new();
    for (name, embodied) in [
        ("CAR_ELECTRIC_ONE_KM", DamageVector::new(2.0e-8, 0.01, 0.1, 1.6)),
        ("BUS_LARGE_DISTANCE_ONE_PERSON_KM", DamageVector::new(1.0e-8, 0.004, 0.03, 0.45)),
    ] {
        transport.insert(
            name.to_string(),
            TransportationMean {
                name: name.to_string(),
                french: None,
                embodied,
            },
        );
    }

    InMemoryRepository {
        hardware,
        software,
        transport,
        network: DamageRange::new(
            DamageVector::new(1.0e-8, 0.003, 0.02, 0.5),
            DamageVector::new(4.0e-8, 0.012, 0.08, 2.0),
        ),
    }
}
