use keyswitch_export::render_kicad_mod;
use keyswitch_footprint::keycap::{Keycap, Spacing};
use keyswitch_footprint::switch::{
    CherryMx, CutoutStyle, FootprintGenerator, HotswapKailhMx, MxMount, StabilizerCherryMx,
    SwitchOptions,
};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.lines().filter(|l| l.contains(needle)).count()
}

#[test]
fn cherry_mx_pcb_with_keycap() {
    let keycap = Keycap::regular(1.0, Spacing::uniform(19.0)).unwrap();
    let fp = CherryMx::new(
        MxMount::Pcb,
        Some(CutoutStyle::Simple),
        SwitchOptions::default()
            .with_path3d("${KISYS3DMOD}/keyswitch.3dshapes")
            .with_keycap(Some(keycap)),
    )
    .footprint()
    .unwrap();
    let out = render_kicad_mod(&fp);

    assert!(out.starts_with("(module SW_Cherry_MX_PCB_1.00u (layer F.Cu) (tedit 0)\n"));
    assert!(out.contains("  (descr \"Cherry MX keyswitch PCB Mount with 1.00u keycap\")\n"));
    assert!(out.contains("  (tags \"Cherry MX Keyboard Keyswitch Switch PCB Cutout 1.00u\")\n"));
    assert!(out.contains("  (fp_text reference REF** (at 0 -8) (layer F.SilkS)\n"));
    assert!(out.contains("  (fp_text value SW_Cherry_MX_PCB_1.00u (at 0 8) (layer F.Fab)\n"));
    assert!(out.contains("  (model ${KISYS3DMOD}/keyswitch.3dshapes/SW_Cherry_MX_PCB.wrl\n"));
    assert!(out.contains("  (fp_line (start -7.1 -7.1) (end 7.1 -7.1) (layer F.SilkS) (width 0.12))\n"));
    assert!(out.contains("  (fp_line (start -7.25 -7.25) (end 7.25 -7.25) (layer F.CrtYd) (width 0.05))\n"));
    assert!(out.contains("  (fp_line (start -9.5 -9.5) (end 9.5 -9.5) (layer Dwgs.User) (width 0.1))\n"));
    assert!(out.contains(
        "  (pad 1 thru_hole circle (at -3.81 -2.54) (size 2.5 2.5) (drill 1.5) (layers *.Cu B.Mask))\n"
    ));
    assert_eq!(count(&out, "np_thru_hole"), 3);
    assert_eq!(count(&out, "(layer Eco1.User)"), 4);
    // keycap outline comes last
    assert!(out.ends_with("(layer Dwgs.User) (width 0.1))\n)\n"));
}

#[test]
fn hotswap_socket_is_smd_with_arcs() {
    let fp = HotswapKailhMx::new(false, Some(CutoutStyle::Relief), SwitchOptions::default())
        .footprint()
        .unwrap();
    let out = render_kicad_mod(&fp);

    assert!(out.contains("  (attr smd)\n"));
    assert!(out.contains(
        "  (fp_arc (start -4 -4.8) (end -4 -6.8) (angle -90) (layer B.Fab) (width 0.12))\n"
    ));
    assert_eq!(count(&out, "fp_arc"), 6);
    assert!(out.contains("(roundrect_rratio 0.1)"));
    // relief cutout: 21 points, 20 segments
    assert_eq!(count(&out, "(layer Eco1.User)"), 20);
}

#[test]
fn stabilizer_is_virtual_with_unnumbered_holes() {
    let fp = StabilizerCherryMx::new(6.25, true).unwrap().footprint().unwrap();
    let out = render_kicad_mod(&fp);

    assert!(out.contains("  (attr virtual)\n"));
    assert!(out.contains(
        "  (pad \"\" np_thru_hole circle (at -50 -6.985) (size 3.048 3.048) (drill 3.048) (layers *.Cu *.Mask))\n"
    ));
    assert!(out.contains("  (fp_text reference REF** (at 0 -2) (layer F.SilkS)\n"));
    assert_eq!(count(&out, "(layer Eco1.User)"), 8);
}

#[test]
fn output_is_deterministic() {
    let build = || {
        CherryMx::new(MxMount::Plate, Some(CutoutStyle::Relief), SwitchOptions::default())
            .footprint()
            .unwrap()
    };
    assert_eq!(render_kicad_mod(&build()), render_kicad_mod(&build()));
}
