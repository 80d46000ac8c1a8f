use mohrcirc::prelude::*;
use russell_lab::approx_eq;

// TEST GOAL
//
// This test runs the whole pipeline over the sample data files:
// read -> scale -> average -> principal stresses -> circle geometry
//
// DATA (data/stress)
//
// Gr1_MatPt1.dat   V = 2.5   diag(10, 20, 30)
// Gr1_MatPt2.dat   V = 2.5   diag(30, 40, 50)
// Gr1_MatPt3.dat   V = 5.0   [[40, 10, 0], [10, 10, 0], [0, 0, 0]]
//
// VOLUME-WEIGHTED AVERAGE (total volume = 10)
//
// sxx = (2.5*10 + 2.5*30 + 5*40) / 10 = 30
// syy = (2.5*20 + 2.5*40 + 5*10) / 10 = 20
// szz = (2.5*30 + 2.5*50 + 5* 0) / 10 = 20
// sxy = (            5*10      ) / 10 =  5
//
// The 2x2 block [[30, 5], [5, 20]] has eigenvalues 25 ± 5√2, hence
// s1 = 25 + 5√2, s2 = 20, s3 = 25 - 5√2

const SQRT_2: f64 = std::f64::consts::SQRT_2;

#[test]
fn test_mohr_circle_pipeline() -> Result<(), StrError> {
    // read the samples
    let mut samples = Vec::new();
    for index in 1..=3 {
        let path = FilePath::gauss_data("Gr1_MatPt", index, "dat", false);
        samples.push(GaussPointSample::from_text_file(&path)?);
    }
    assert_eq!(samples[0].volume(), 2.5);
    assert_eq!(samples[2].volume(), 5.0);

    // the first file is the reference single-point scenario
    let first = PrincipalStresses::new(samples[0].stress())?;
    approx_eq(first.s1, 30.0, 1e-13);
    approx_eq(first.s2, 20.0, 1e-13);
    approx_eq(first.s3, 10.0, 1e-13);
    let major = first.major_circle();
    approx_eq(major.center, 20.0, 1e-13);
    approx_eq(major.radius, 10.0, 1e-13);

    // volume-weighted average
    let avg = average_stress(&samples, AvgMethod::VolumeWeighted)?;
    approx_eq(avg.get(0, 0), 30.0, 1e-14);
    approx_eq(avg.get(1, 1), 20.0, 1e-14);
    approx_eq(avg.get(2, 2), 20.0, 1e-14);
    approx_eq(avg.get(0, 1), 5.0, 1e-14);

    // principal stresses of the average
    let stresses = PrincipalStresses::new(&avg)?;
    approx_eq(stresses.s1, 25.0 + 5.0 * SQRT_2, 1e-12);
    approx_eq(stresses.s2, 20.0, 1e-12);
    approx_eq(stresses.s3, 25.0 - 5.0 * SQRT_2, 1e-12);

    // circle geometry
    let [major, minor_a, minor_b] = stresses.circles();
    approx_eq(major.center, 25.0, 1e-12);
    approx_eq(major.radius, 5.0 * SQRT_2, 1e-12);
    assert!(major.radius >= minor_a.radius);
    assert!(major.radius >= minor_b.radius);

    // the arithmetic average must match the volume-weighted average
    // computed with unit volumes
    let unit: Vec<_> = samples.iter().map(|s| s.with_unit_volume()).collect();
    let ari = average_stress(&samples, AvgMethod::Arithmetic)?;
    let ari_check = average_stress(&unit, AvgMethod::VolumeWeighted)?;
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(ari.get(i, j), ari_check.get(i, j));
        }
    }
    Ok(())
}

#[test]
fn test_mohr_circle_pipeline_with_scaling() -> Result<(), StrError> {
    // scale MPa to GPa before averaging; the geometry shrinks accordingly
    let mut samples = Vec::new();
    for index in 1..=3 {
        let path = FilePath::gauss_data("Gr1_MatPt", index, "dat", false);
        let sample = GaussPointSample::from_text_file(&path)?;
        samples.push(sample.scaled(0.001)?);
    }
    let avg = average_stress(&samples, AvgMethod::VolumeWeighted)?;
    let stresses = PrincipalStresses::new(&avg)?;
    approx_eq(stresses.s1, (25.0 + 5.0 * SQRT_2) / 1000.0, 1e-14);
    approx_eq(stresses.s3, (25.0 - 5.0 * SQRT_2) / 1000.0, 1e-14);
    let major = stresses.major_circle();
    approx_eq(major.center, 0.025, 1e-14);
    approx_eq(major.radius, 0.005 * SQRT_2, 1e-14);
    Ok(())
}
