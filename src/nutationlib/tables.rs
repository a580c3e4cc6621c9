//! Embedded series tables
//!
//! The 77 lunisolar terms of IAU 2000B (McCarthy & Luzum 2003), with
//! secular rates and out-of-phase amplitudes, and the CIO locator series
//! s + XY/2 for IAU 2000 and IAU 2006 (Table 5.2d).

use crate::fundamentals::N_ARGS;
use crate::serieslib::Term;

/// Lunisolar nutation, constant part
///
/// Multipliers (l, l', F, D, Omega). Components (dpsi, deps), each (sin, cos),
/// in units of 0.1 microarcsecond.
#[rustfmt::skip]
pub(super) const LUNISOLAR: [Term<5, 2>; 77] = [
    Term::new([ 0,  0,  0,  0,  1], [[-172064161.0,  33386.0], [ 15377.0,  92052331.0]]),
    Term::new([ 0,  0,  2, -2,  2], [[ -13170906.0, -13696.0], [ -4587.0,   5730336.0]]),
    Term::new([ 0,  0,  2,  0,  2], [[  -2276413.0,   2796.0], [  1374.0,    978459.0]]),
    Term::new([ 0,  0,  0,  0,  2], [[   2074554.0,   -698.0], [  -291.0,   -897492.0]]),
    Term::new([ 0,  1,  0,  0,  0], [[   1475877.0,  11817.0], [ -1924.0,     73871.0]]),
    Term::new([ 0,  1,  2, -2,  2], [[   -516821.0,   -524.0], [  -174.0,    224386.0]]),
    Term::new([ 1,  0,  0,  0,  0], [[    711159.0,   -872.0], [   358.0,     -6750.0]]),
    Term::new([ 0,  0,  2,  0,  1], [[   -387298.0,    380.0], [   318.0,    200728.0]]),
    Term::new([ 1,  0,  2,  0,  2], [[   -301461.0,    816.0], [   367.0,    129025.0]]),
    Term::new([ 0, -1,  2, -2,  2], [[    215829.0,    111.0], [   132.0,    -95929.0]]),
    Term::new([ 0,  0,  2, -2,  1], [[    128227.0,    181.0], [    39.0,    -68982.0]]),
    Term::new([-1,  0,  2,  0,  2], [[    123457.0,     19.0], [    -4.0,    -53311.0]]),
    Term::new([-1,  0,  0,  2,  0], [[    156994.0,   -168.0], [    82.0,     -1235.0]]),
    Term::new([ 1,  0,  0,  0,  1], [[     63110.0,     27.0], [    -9.0,    -33228.0]]),
    Term::new([-1,  0,  0,  0,  1], [[    -57976.0,   -189.0], [   -75.0,     31429.0]]),
    Term::new([-1,  0,  2,  2,  2], [[    -59641.0,    149.0], [    66.0,     25543.0]]),
    Term::new([ 1,  0,  2,  0,  1], [[    -51613.0,    129.0], [    78.0,     26366.0]]),
    Term::new([-2,  0,  2,  0,  1], [[     45893.0,     31.0], [    20.0,    -24236.0]]),
    Term::new([ 0,  0,  0,  2,  0], [[     63384.0,   -150.0], [    29.0,     -1220.0]]),
    Term::new([ 0,  0,  2,  2,  2], [[    -38571.0,    158.0], [    68.0,     16452.0]]),
    Term::new([ 0, -2,  2, -2,  2], [[     32481.0,      0.0], [     0.0,    -13870.0]]),
    Term::new([-2,  0,  0,  2,  0], [[    -47722.0,    -18.0], [   -25.0,       477.0]]),
    Term::new([ 2,  0,  2,  0,  2], [[    -31046.0,    131.0], [    59.0,     13238.0]]),
    Term::new([ 1,  0,  2, -2,  2], [[     28593.0,     -1.0], [    -3.0,    -12338.0]]),
    Term::new([-1,  0,  2,  0,  1], [[     20441.0,     10.0], [    -3.0,    -10758.0]]),
    Term::new([ 2,  0,  0,  0,  0], [[     29243.0,    -74.0], [    13.0,      -609.0]]),
    Term::new([ 0,  0,  2,  0,  0], [[     25887.0,    -66.0], [    11.0,      -550.0]]),
    Term::new([ 0,  1,  0,  0,  1], [[    -14053.0,     79.0], [   -45.0,      8551.0]]),
    Term::new([-1,  0,  0,  2,  1], [[     15164.0,     11.0], [    -1.0,     -8001.0]]),
    Term::new([ 0,  2,  2, -2,  2], [[    -15794.0,    -16.0], [    -5.0,      6850.0]]),
    Term::new([ 0,  0, -2,  2,  0], [[     21783.0,     13.0], [    13.0,      -167.0]]),
    Term::new([ 1,  0,  0, -2,  1], [[    -12873.0,    -37.0], [   -14.0,      6953.0]]),
    Term::new([ 0, -1,  0,  0,  1], [[    -12654.0,     63.0], [    26.0,      6415.0]]),
    Term::new([-1,  0,  2,  2,  1], [[    -10204.0,     25.0], [    15.0,      5222.0]]),
    Term::new([ 0,  2,  0,  0,  0], [[     16707.0,    -10.0], [    10.0,       168.0]]),
    Term::new([ 1,  0,  2,  2,  2], [[     -7691.0,     44.0], [    19.0,      3268.0]]),
    Term::new([-2,  0,  2,  0,  0], [[    -11024.0,    -14.0], [     2.0,       104.0]]),
    Term::new([ 0,  1,  2,  0,  2], [[      7566.0,    -11.0], [    -5.0,     -3250.0]]),
    Term::new([ 0,  0,  2,  2,  1], [[     -6637.0,     25.0], [    14.0,      3353.0]]),
    Term::new([ 0, -1,  2,  0,  2], [[     -7141.0,      8.0], [     4.0,      3070.0]]),
    Term::new([ 0,  0,  0,  2,  1], [[     -6302.0,      2.0], [     4.0,      3272.0]]),
    Term::new([ 1,  0,  2, -2,  1], [[      5800.0,      2.0], [    -1.0,     -3045.0]]),
    Term::new([ 2,  0,  2, -2,  2], [[      6443.0,     -7.0], [    -4.0,     -2768.0]]),
    Term::new([-2,  0,  0,  2,  1], [[     -5774.0,    -15.0], [    -5.0,      3041.0]]),
    Term::new([ 2,  0,  2,  0,  1], [[     -5350.0,     21.0], [    12.0,      2695.0]]),
    Term::new([ 0, -1,  2, -2,  1], [[     -4752.0,     -3.0], [    -3.0,      2719.0]]),
    Term::new([ 0,  0,  0, -2,  1], [[     -4940.0,    -21.0], [    -9.0,      2720.0]]),
    Term::new([-1, -1,  0,  2,  0], [[      7350.0,     -8.0], [     4.0,       -51.0]]),
    Term::new([ 2,  0,  0, -2,  1], [[      4065.0,      6.0], [     1.0,     -2206.0]]),
    Term::new([ 1,  0,  0,  2,  0], [[      6579.0,    -24.0], [     2.0,      -199.0]]),
    Term::new([ 0,  1,  2, -2,  1], [[      3579.0,      5.0], [     1.0,     -1900.0]]),
    Term::new([ 1, -1,  0,  0,  0], [[      4725.0,     -6.0], [     3.0,       -41.0]]),
    Term::new([-2,  0,  2,  0,  2], [[     -3075.0,     -2.0], [    -1.0,      1313.0]]),
    Term::new([ 3,  0,  2,  0,  2], [[     -2904.0,     15.0], [     7.0,      1233.0]]),
    Term::new([ 0, -1,  0,  2,  0], [[      4348.0,    -10.0], [     2.0,       -81.0]]),
    Term::new([ 1, -1,  2,  0,  2], [[     -2878.0,      8.0], [     4.0,      1232.0]]),
    Term::new([ 0,  0,  0,  1,  0], [[     -4230.0,      5.0], [    -2.0,       -20.0]]),
    Term::new([-1, -1,  2,  2,  2], [[     -2819.0,      7.0], [     3.0,      1207.0]]),
    Term::new([-1,  0,  2,  0,  0], [[     -4056.0,      5.0], [    -2.0,        40.0]]),
    Term::new([ 0, -1,  2,  2,  2], [[     -2647.0,     11.0], [     5.0,      1129.0]]),
    Term::new([-2,  0,  0,  0,  1], [[     -2294.0,    -10.0], [    -4.0,      1266.0]]),
    Term::new([ 1,  1,  2,  0,  2], [[      2481.0,     -7.0], [    -3.0,     -1062.0]]),
    Term::new([ 2,  0,  0,  0,  1], [[      2179.0,     -2.0], [    -2.0,     -1129.0]]),
    Term::new([-1,  1,  0,  1,  0], [[      3276.0,      1.0], [     0.0,        -9.0]]),
    Term::new([ 1,  1,  0,  0,  0], [[     -3389.0,      5.0], [    -2.0,        35.0]]),
    Term::new([ 1,  0,  2,  0,  0], [[      3339.0,    -13.0], [     1.0,      -107.0]]),
    Term::new([-1,  0,  2, -2,  1], [[     -1987.0,     -6.0], [    -2.0,      1073.0]]),
    Term::new([ 1,  0,  0,  0,  2], [[     -1981.0,      0.0], [     0.0,       854.0]]),
    Term::new([-1,  0,  0,  1,  0], [[      4026.0,   -353.0], [  -139.0,      -553.0]]),
    Term::new([ 0,  0,  2,  1,  2], [[      1660.0,     -5.0], [    -2.0,      -710.0]]),
    Term::new([-1,  0,  2,  4,  2], [[     -1521.0,      9.0], [     4.0,       647.0]]),
    Term::new([-1,  1,  0,  1,  1], [[      1314.0,      0.0], [     0.0,      -700.0]]),
    Term::new([ 0, -2,  2, -2,  1], [[     -1283.0,      0.0], [     0.0,       672.0]]),
    Term::new([ 1,  0,  2,  2,  1], [[     -1331.0,      8.0], [     4.0,       663.0]]),
    Term::new([-2,  0,  2,  2,  2], [[      1383.0,     -2.0], [    -2.0,      -594.0]]),
    Term::new([-1,  0,  0,  0,  2], [[      1405.0,      4.0], [     2.0,      -610.0]]),
    Term::new([ 1,  1,  2, -2,  2], [[      1290.0,      0.0], [     0.0,      -556.0]]),
];

/// Lunisolar nutation, secular rates (0.1 microarcsecond per century)
#[rustfmt::skip]
pub(super) const LUNISOLAR_RATES: [Term<5, 2>; 37] = [
    Term::new([ 0,  0,  0,  0,  1], [[   -174666.0,      0.0], [     0.0,      9086.0]]),
    Term::new([ 0,  0,  2, -2,  2], [[     -1675.0,      0.0], [     0.0,     -3015.0]]),
    Term::new([ 0,  0,  2,  0,  2], [[      -234.0,      0.0], [     0.0,      -485.0]]),
    Term::new([ 0,  0,  0,  0,  2], [[       207.0,      0.0], [     0.0,       470.0]]),
    Term::new([ 0,  1,  0,  0,  0], [[     -3633.0,      0.0], [     0.0,      -184.0]]),
    Term::new([ 0,  1,  2, -2,  2], [[      1226.0,      0.0], [     0.0,      -677.0]]),
    Term::new([ 1,  0,  0,  0,  0], [[        73.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  0,  2,  0,  1], [[      -367.0,      0.0], [     0.0,        18.0]]),
    Term::new([ 1,  0,  2,  0,  2], [[       -36.0,      0.0], [     0.0,       -63.0]]),
    Term::new([ 0, -1,  2, -2,  2], [[      -494.0,      0.0], [     0.0,       299.0]]),
    Term::new([ 0,  0,  2, -2,  1], [[       137.0,      0.0], [     0.0,        -9.0]]),
    Term::new([-1,  0,  2,  0,  2], [[        11.0,      0.0], [     0.0,        32.0]]),
    Term::new([-1,  0,  0,  2,  0], [[        10.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 1,  0,  0,  0,  1], [[        63.0,      0.0], [     0.0,         0.0]]),
    Term::new([-1,  0,  0,  0,  1], [[       -63.0,      0.0], [     0.0,         0.0]]),
    Term::new([-1,  0,  2,  2,  2], [[       -11.0,      0.0], [     0.0,       -11.0]]),
    Term::new([ 1,  0,  2,  0,  1], [[       -42.0,      0.0], [     0.0,         0.0]]),
    Term::new([-2,  0,  2,  0,  1], [[        50.0,      0.0], [     0.0,       -10.0]]),
    Term::new([ 0,  0,  0,  2,  0], [[        11.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  0,  2,  2,  2], [[        -1.0,      0.0], [     0.0,       -11.0]]),
    Term::new([ 2,  0,  2,  0,  2], [[        -1.0,      0.0], [     0.0,       -11.0]]),
    Term::new([ 1,  0,  2, -2,  2], [[         0.0,      0.0], [     0.0,        10.0]]),
    Term::new([-1,  0,  2,  0,  1], [[        21.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  1,  0,  0,  1], [[       -25.0,      0.0], [     0.0,        -2.0]]),
    Term::new([-1,  0,  0,  2,  1], [[        10.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  2,  2, -2,  2], [[        72.0,      0.0], [     0.0,       -42.0]]),
    Term::new([ 1,  0,  0, -2,  1], [[       -10.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0, -1,  0,  0,  1], [[        11.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  2,  0,  0,  0], [[       -85.0,      0.0], [     0.0,        -1.0]]),
    Term::new([ 0,  1,  2,  0,  2], [[       -21.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  0,  2,  2,  1], [[       -11.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0, -1,  2,  0,  2], [[        21.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  0,  0,  2,  1], [[       -11.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 1,  0,  2, -2,  1], [[        10.0,      0.0], [     0.0,         0.0]]),
    Term::new([-2,  0,  0,  2,  1], [[       -11.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0, -1,  2, -2,  1], [[       -11.0,      0.0], [     0.0,         0.0]]),
    Term::new([ 0,  0,  0, -2,  1], [[       -11.0,      0.0], [     0.0,         0.0]]),
];

// CIO locator tiers by power of t, amplitudes (sin, cos) in microarcseconds,
// multipliers over the full fundamental-argument vector

#[rustfmt::skip]
pub(super) const CIO_2006_T0: [Term<N_ARGS, 1>; 33] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-2640.73, 0.39]]),
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-63.53, 0.02]]),
    Term::new([ 0,  0,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-11.75, -0.01]]),
    Term::new([ 0,  0,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-11.21, -0.01]]),
    Term::new([ 0,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[4.57, 0.00]]),
    Term::new([ 0,  0,  2,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-2.02, 0.00]]),
    Term::new([ 0,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-1.98, 0.00]]),
    Term::new([ 0,  0,  0,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.72, 0.00]]),
    Term::new([ 0,  1,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.41, 0.01]]),
    Term::new([ 0,  1,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.26, 0.01]]),
    Term::new([ 1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.63, 0.00]]),
    Term::new([ 1,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.63, 0.00]]),
    Term::new([ 0,  1,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.46, 0.00]]),
    Term::new([ 0,  1,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.45, 0.00]]),
    Term::new([ 0,  0,  4, -4,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.36, 0.00]]),
    Term::new([ 0,  0,  1, -1,  1,  0, -8, 12,  0,  0,  0,  0,  0,  0], [[0.24, 0.12]]),
    Term::new([ 0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.32, 0.00]]),
    Term::new([ 0,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.28, 0.00]]),
    Term::new([ 1,  0,  2,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.27, 0.00]]),
    Term::new([ 1,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.26, 0.00]]),
    Term::new([ 0,  0,  2, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.21, 0.00]]),
    Term::new([ 0,  1, -2,  2, -3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.19, 0.00]]),
    Term::new([ 0,  1, -2,  2, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.18, 0.00]]),
    Term::new([ 0,  0,  0,  0,  0,  0,  8, -13,  0,  0,  0,  0,  0, -1], [[0.10, -0.05]]),
    Term::new([ 0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.15, 0.00]]),
    Term::new([ 2,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.14, 0.00]]),
    Term::new([ 0,  1,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.14, 0.00]]),
    Term::new([ 1,  0,  0, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.14, 0.00]]),
    Term::new([ 1,  0,  0, -2, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.14, 0.00]]),
    Term::new([ 0,  0,  4, -2,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.13, 0.00]]),
    Term::new([ 0,  0,  2, -2,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.11, 0.00]]),
    Term::new([ 1,  0, -2,  0, -3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.11, 0.00]]),
    Term::new([ 1,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.11, 0.00]]),
];

#[rustfmt::skip]
pub(super) const CIO_2006_T1: [Term<N_ARGS, 1>; 3] = [
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.07, 3.57]]),
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.73, -0.03]]),
    Term::new([ 0,  0,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.00, 0.48]]),
];

#[rustfmt::skip]
pub(super) const CIO_2006_T2: [Term<N_ARGS, 1>; 25] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[743.52, -0.17]]),
    Term::new([ 0,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[56.91, 0.06]]),
    Term::new([ 0,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[9.84, -0.01]]),
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-8.85, 0.01]]),
    Term::new([ 0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-6.38, -0.05]]),
    Term::new([ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-3.07, 0.00]]),
    Term::new([ 0,  1,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[2.23, 0.00]]),
    Term::new([ 0,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.67, 0.00]]),
    Term::new([ 1,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.30, 0.00]]),
    Term::new([ 0,  1, -2,  2, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.93, 0.00]]),
    Term::new([ 1,  0,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.68, 0.00]]),
    Term::new([ 0,  0,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.55, 0.00]]),
    Term::new([ 1,  0, -2,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.53, 0.00]]),
    Term::new([ 0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.27, 0.00]]),
    Term::new([ 1,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.27, 0.00]]),
    Term::new([ 1,  0, -2, -2, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.26, 0.00]]),
    Term::new([ 1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.25, 0.00]]),
    Term::new([ 1,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.22, 0.00]]),
    Term::new([ 2,  0,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.21, 0.00]]),
    Term::new([ 2,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.20, 0.00]]),
    Term::new([ 0,  0,  2,  2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.17, 0.00]]),
    Term::new([ 2,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.13, 0.00]]),
    Term::new([ 2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.13, 0.00]]),
    Term::new([ 1,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.12, 0.00]]),
    Term::new([ 0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.11, 0.00]]),
];

#[rustfmt::skip]
pub(super) const CIO_2006_T3: [Term<N_ARGS, 1>; 4] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.30, -23.42]]),
    Term::new([ 0,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.03, -1.46]]),
    Term::new([ 0,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.01, -0.25]]),
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.00, 0.23]]),
];

#[rustfmt::skip]
pub(super) const CIO_2006_T4: [Term<N_ARGS, 1>; 1] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.26, -0.01]]),
];

/// Polynomial part of s + XY/2, microarcseconds
pub(super) const CIO_2006_POLY: [[f64; 1]; 6] = [[94.00], [3808.65], [-122.68], [-72574.11], [27.98], [15.62]];

#[rustfmt::skip]
pub(super) const CIO_2000_T0: [Term<N_ARGS, 1>; 33] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-2640.73, 0.39]]),
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-63.53, 0.02]]),
    Term::new([ 0,  0,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-11.75, -0.01]]),
    Term::new([ 0,  0,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-11.21, -0.01]]),
    Term::new([ 0,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[4.57, 0.00]]),
    Term::new([ 0,  0,  2,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-2.02, 0.00]]),
    Term::new([ 0,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-1.98, 0.00]]),
    Term::new([ 0,  0,  0,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.72, 0.00]]),
    Term::new([ 0,  1,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.41, 0.01]]),
    Term::new([ 0,  1,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.26, 0.01]]),
    Term::new([ 1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.63, 0.00]]),
    Term::new([ 1,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.63, 0.00]]),
    Term::new([ 0,  1,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.46, 0.00]]),
    Term::new([ 0,  1,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.45, 0.00]]),
    Term::new([ 0,  0,  4, -4,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.36, 0.00]]),
    Term::new([ 0,  0,  1, -1,  1,  0, -8, 12,  0,  0,  0,  0,  0,  0], [[0.24, 0.12]]),
    Term::new([ 0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.32, 0.00]]),
    Term::new([ 0,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.28, 0.00]]),
    Term::new([ 1,  0,  2,  0,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.27, 0.00]]),
    Term::new([ 1,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.26, 0.00]]),
    Term::new([ 0,  0,  2, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.21, 0.00]]),
    Term::new([ 0,  1, -2,  2, -3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.19, 0.00]]),
    Term::new([ 0,  1, -2,  2, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.18, 0.00]]),
    Term::new([ 0,  0,  0,  0,  0,  0,  8, -13,  0,  0,  0,  0,  0, -1], [[0.10, -0.05]]),
    Term::new([ 0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.15, 0.00]]),
    Term::new([ 2,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.14, 0.00]]),
    Term::new([ 0,  1,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.14, 0.00]]),
    Term::new([ 1,  0,  0, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.14, 0.00]]),
    Term::new([ 1,  0,  0, -2, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.14, 0.00]]),
    Term::new([ 0,  0,  4, -2,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.13, 0.00]]),
    Term::new([ 0,  0,  2, -2,  4,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.11, 0.00]]),
    Term::new([ 1,  0, -2,  0, -3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.11, 0.00]]),
    Term::new([ 1,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.11, 0.00]]),
];

#[rustfmt::skip]
pub(super) const CIO_2000_T1: [Term<N_ARGS, 1>; 3] = [
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.07, 3.57]]),
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.71, -0.03]]),
    Term::new([ 0,  0,  2, -2,  3,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.00, 0.48]]),
];

#[rustfmt::skip]
pub(super) const CIO_2000_T2: [Term<N_ARGS, 1>; 25] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[743.53, -0.17]]),
    Term::new([ 0,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[56.91, 0.06]]),
    Term::new([ 0,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[9.84, -0.01]]),
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-8.85, 0.01]]),
    Term::new([ 0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-6.38, -0.05]]),
    Term::new([ 1,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-3.07, 0.00]]),
    Term::new([ 0,  1,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[2.23, 0.00]]),
    Term::new([ 0,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.67, 0.00]]),
    Term::new([ 1,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[1.30, 0.00]]),
    Term::new([ 0,  1, -2,  2, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.93, 0.00]]),
    Term::new([ 1,  0,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.68, 0.00]]),
    Term::new([ 0,  0,  2, -2,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.55, 0.00]]),
    Term::new([ 1,  0, -2,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.53, 0.00]]),
    Term::new([ 0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.27, 0.00]]),
    Term::new([ 1,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.27, 0.00]]),
    Term::new([ 1,  0, -2, -2, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.26, 0.00]]),
    Term::new([ 1,  0,  0,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.25, 0.00]]),
    Term::new([ 1,  0,  2,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.22, 0.00]]),
    Term::new([ 2,  0,  0, -2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.21, 0.00]]),
    Term::new([ 2,  0, -2,  0, -1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.20, 0.00]]),
    Term::new([ 0,  0,  2,  2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.17, 0.00]]),
    Term::new([ 2,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.13, 0.00]]),
    Term::new([ 2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.13, 0.00]]),
    Term::new([ 1,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.12, 0.00]]),
    Term::new([ 0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.11, 0.00]]),
];

#[rustfmt::skip]
pub(super) const CIO_2000_T3: [Term<N_ARGS, 1>; 4] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.30, -23.42]]),
    Term::new([ 0,  0,  2, -2,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.03, -1.46]]),
    Term::new([ 0,  0,  2,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.01, -0.25]]),
    Term::new([ 0,  0,  0,  0,  2,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[0.00, 0.23]]),
];

#[rustfmt::skip]
pub(super) const CIO_2000_T4: [Term<N_ARGS, 1>; 1] = [
    Term::new([ 0,  0,  0,  0,  1,  0,  0,  0,  0,  0,  0,  0,  0,  0], [[-0.26, -0.01]]),
];

/// Polynomial part of s + XY/2, microarcseconds
pub(super) const CIO_2000_POLY: [[f64; 1]; 6] = [[94.00], [3808.35], [-119.94], [-72574.09], [27.70], [15.61]];
