//! The stock batch of footprint libraries.

use tracing::debug;

use crate::config::LibraryConfig;
use crate::error::FootprintError;
use crate::keycap::Keycap;
use crate::node::Footprint;
use crate::switch::{
    AlpsMatias, ChocType, CherryMx, FootprintGenerator, HotswapKailhMx, HybridCherryMxAlps,
    KailhChoc, KailhChocMini, KailhKh, KailhNb, MxMount, StabilizerCherryMx, SwitchOptions,
};

const CHOC_TYPES: [ChocType; 3] = [ChocType::V1, ChocType::V2, ChocType::V1V2];

/// Footprints sharing one `<name>.pretty` directory.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryGroup {
    pub name: String,
    pub footprints: Vec<Footprint>,
}

impl LibraryGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            footprints: Vec::new(),
        }
    }

    /// # Errors
    ///
    /// [`FootprintError::DuplicateFootprint`] when the group already holds a footprint of the
    /// same name; both would map to the same file.
    pub fn add(&mut self, footprint: Footprint) -> Result<(), FootprintError> {
        if self.footprints.iter().any(|fp| fp.name == footprint.name) {
            return Err(FootprintError::DuplicateFootprint {
                group: self.name.clone(),
                name: footprint.name,
            });
        }
        self.footprints.push(footprint);
        Ok(())
    }

    /// Adds the bare footprint, then one footprint per keycap.
    fn add_with_keycaps<F>(
        &mut self,
        options: &SwitchOptions,
        keycaps: &[Keycap],
        build: F,
    ) -> Result<(), FootprintError>
    where
        F: Fn(SwitchOptions) -> Result<Footprint, FootprintError>,
    {
        self.add(build(options.clone())?)?;
        for keycap in keycaps {
            self.add(build(options.clone().with_keycap(Some(keycap.clone())))?)?;
        }
        Ok(())
    }
}

/// Build every library group described by `config`.
///
/// # Errors
///
/// Unknown keycap presets, unsupported stabilizer sizes, geometry failures and duplicate names.
pub fn generate_library(config: &LibraryConfig) -> Result<Vec<LibraryGroup>, FootprintError> {
    let options = SwitchOptions {
        path3d: config.path3d.clone(),
        ..SwitchOptions::default()
    };
    let mx_keycaps = config.keycaps_for(&config.mx_keycaps, config.mx_spacing())?;
    let choc_keycaps = config.keycaps_for(&config.choc_keycaps, config.choc_spacing)?;

    let mut groups = Vec::new();

    let mut cherry = LibraryGroup::new("Switch_Keyboard_Cherry_MX");
    for mount in [MxMount::Pcb, MxMount::Plate] {
        cherry.add_with_keycaps(&options, &mx_keycaps, |o| {
            CherryMx::new(mount, config.mx_cutout, o).footprint()
        })?;
    }
    groups.push(cherry);

    let mut hotswap = LibraryGroup::new("Switch_Keyboard_Hotswap_Kailh");
    for plated in [false, true] {
        hotswap.add_with_keycaps(&options, &mx_keycaps, |o| {
            HotswapKailhMx::new(plated, config.hotswap_cutout, o).footprint()
        })?;
    }
    groups.push(hotswap);

    let mut alps = LibraryGroup::new("Switch_Keyboard_Alps_Matias");
    alps.add_with_keycaps(&options, &mx_keycaps, |o| AlpsMatias::new(true, o).footprint())?;
    groups.push(alps);

    let mut kailh = LibraryGroup::new("Switch_Keyboard_Kailh");
    for switch_type in CHOC_TYPES {
        kailh.add_with_keycaps(&options, &choc_keycaps, |o| {
            KailhChoc::new(switch_type, false, false, true, o)?.footprint()
        })?;
    }
    kailh.add(KailhChocMini::new(true, options.clone()).footprint()?)?;
    kailh.add(KailhKh::new(true, options.clone()).footprint()?)?;
    kailh.add(KailhNb::new(true, options.clone()).footprint()?)?;
    groups.push(kailh);

    let mut choc_hotswap = LibraryGroup::new("Switch_Keyboard_Hotswap_Kailh_Choc");
    for switch_type in CHOC_TYPES {
        for plated in [false, true] {
            choc_hotswap.add_with_keycaps(&options, &choc_keycaps, |o| {
                KailhChoc::new(switch_type, true, plated, true, o)?.footprint()
            })?;
        }
    }
    groups.push(choc_hotswap);

    let mut hybrid = LibraryGroup::new("Switch_Keyboard_Hybrid");
    hybrid.add_with_keycaps(&options, &mx_keycaps, |o| HybridCherryMxAlps::new(o).footprint())?;
    groups.push(hybrid);

    let mut stabilizers = LibraryGroup::new("Mounting_Keyboard_Stabilizer");
    for &size in &config.stabilizer_sizes {
        let stabilizer = StabilizerCherryMx::new(size, true)?.with_model(config.path3d.clone(), None);
        stabilizers.add(stabilizer.footprint()?)?;
    }
    groups.push(stabilizers);

    for group in &groups {
        debug!(group = %group.name, footprints = group.footprints.len(), "library group built");
    }
    Ok(groups)
}
