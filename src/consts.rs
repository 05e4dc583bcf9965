/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for period boundaries
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin
pub const FARVARDIN: u8 = 1;
/// Month number for Esfand
pub const ESFAND: u8 = 12;

/// Days in Esfand during leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Days in each Jalali month (index 0 unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Julian day number of Jalali 0001-01-01
pub(crate) const JALALI_EPOCH_JDN: i64 = 1_948_321;

/// The Jalali intercalation pattern repeats every 2820 years...
pub(crate) const YEARS_PER_CYCLE: i64 = 2820;
/// ...which span exactly this many days (2820 * 365 + 683 leap days)
pub(crate) const DAYS_PER_CYCLE: i64 = 1_029_983;
/// Anchor year of the grand cycle
pub(crate) const CYCLE_EPOCH_YEAR: i64 = 474;
