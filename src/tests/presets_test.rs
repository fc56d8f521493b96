#[cfg(test)]
mod tests {
    use crate::codec::{format, parse};
    use crate::constraints::{Constraints, MAX_ELBOW, MAX_WRIST_ROTATE, MIN_BASE, MIN_SHOULDER};
    use crate::kinematic_traits::Coordinates;
    use crate::kinematics_error::KinematicsError;
    use crate::presets::{Preset, PresetTable};

    #[test]
    fn test_all_presets_within_limits() {
        let table = PresetTable::standard();
        let limits = Constraints::new();
        for name in ["default", "low", "high", "park", "ninety", "min", "max"] {
            let coords = table.get(name).expect("known preset");
            assert!(limits.compliant(&coords), "{} = {:?}", name, coords);
            assert_eq!(limits.constrain(&coords), coords);
        }
    }

    #[test]
    fn test_min_max_are_bounds() {
        let table = PresetTable::standard();
        let limits = Constraints::new();
        assert_eq!(table.preset(Preset::Min), limits.lower());
        assert_eq!(table.preset(Preset::Max), limits.upper());
        assert_eq!(table.preset(Preset::Min).base, MIN_BASE);
        assert_eq!(table.preset(Preset::Min).shoulder, MIN_SHOULDER);
        assert_eq!(table.preset(Preset::Max).elbow, MAX_ELBOW);
        assert_eq!(table.preset(Preset::Max).wrist_rotate, MAX_WRIST_ROTATE);
    }

    #[test]
    fn test_min_max_text_form() {
        let table = PresetTable::standard();
        assert_eq!(format(&table.preset(Preset::Min)), "19,50,0,40,30,0");
        assert_eq!(format(&table.preset(Preset::Max)), "90,170,180,120,110,86");
        for preset in [Preset::Min, Preset::Max] {
            let coords = table.preset(preset);
            assert_eq!(parse(&format(&coords)), Ok(coords));
        }
    }

    #[test]
    fn test_table_values() {
        let table = PresetTable::standard();
        let expected: [(Preset, [i32; 6]); 5] = [
            (Preset::Default, [50, 140, 90, 70, 40, 86]),
            (Preset::Low, [60, 110, 120, 50, 30, 86]),
            (Preset::High, [40, 130, 30, 90, 90, 0]),
            (Preset::Park, [19, 170, 80, 75, 40, 86]),
            (Preset::Ninety, [85, 110, 90, 70, 40, 86]),
        ];
        for (preset, values) in expected {
            assert_eq!(table.preset(preset), Coordinates::from_array(values), "{}", preset);
        }
        assert_eq!(table.iter().count(), Preset::ALL.len());
    }

    #[test]
    fn test_unknown_preset() {
        let table = PresetTable::standard();
        match table.get("upside_down") {
            Err(KinematicsError::UnknownPreset(name)) => assert_eq!(name, "upside_down"),
            other => panic!("Expected unknown preset, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_between_threads() {
        let table = std::sync::Arc::new(PresetTable::standard());
        let handles: Vec<_> = Preset::ALL.into_iter().map(|preset| {
            let table = table.clone();
            std::thread::spawn(move || table.get(preset.name()).map(|c| (preset, c)))
        }).collect();
        for handle in handles {
            let (preset, coords) = handle.join().unwrap().unwrap();
            assert_eq!(coords, table.preset(preset));
        }
    }

    #[test]
    fn test_custom_limits_follow_into_min_max() {
        let limits = Constraints::from_limits([20, 60, 10, 45, 35, 5], [80, 160, 170, 110, 100, 80]);
        let table = PresetTable::with_limits(&limits);
        assert_eq!(table.get("min").unwrap().as_array(), [20, 60, 10, 45, 35, 5]);
        assert_eq!(table.get("max").unwrap().as_array(), [80, 160, 170, 110, 100, 80]);
    }
}
