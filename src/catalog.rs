// src/catalog.rs
//
// Fixed lists shown in the UI, plus the bundled demo dataset.

use crate::record::CollegeRecord;

/// All Indian states + union territories.
pub const STATES: &[&str] = &[
    "Andhra Pradesh", "Arunachal Pradesh", "Assam", "Bihar", "Chhattisgarh", "Goa", "Gujarat",
    "Haryana", "Himachal Pradesh", "Jharkhand", "Karnataka", "Kerala", "Madhya Pradesh",
    "Maharashtra", "Manipur", "Meghalaya", "Mizoram", "Nagaland", "Odisha", "Punjab",
    "Rajasthan", "Sikkim", "Tamil Nadu", "Telangana", "Tripura", "Uttar Pradesh",
    "Uttarakhand", "West Bengal",
    "Andaman and Nicobar Islands", "Chandigarh", "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi", "Jammu and Kashmir", "Ladakh", "Lakshadweep", "Puducherry",
];

/// Course suggestions for the free-text course input.
pub const COURSES: &[&str] = &[
    "B.Com", "B.A", "B.Sc", "B.Tech", "BBA", "BCA", "MBA", "M.Com", "B.Ed", "LLB", "MBBS", "BDS",
];

/// Case-insensitive lookup of a known state/UT name.
pub fn find_state(s: &str) -> Option<&'static str> {
    let s = s.trim();
    STATES.iter().copied().find(|st| st.eq_ignore_ascii_case(s))
}

// name, city, state, courses, fees, cutoff, website, contact
const SAMPLE: &[[&str; 8]] = &[
    ["Hansraj College", "Delhi", "Delhi", "B.Com,B.A", "₹50,000/year", "88%", "https://hansraj.du.ac.in", "011-2766-1234"],
    ["SRCC", "Delhi", "Delhi", "B.Com,M.Com", "₹85,000/year", "95%", "https://srcc.edu", "011-2766-9999"],
    ["St. Xavier's College", "Mumbai", "Maharashtra", "B.Com,B.A", "₹60,000/year", "86%", "https://xaviers.edu", "022-1234-5678"],
    ["Christ University", "Bengaluru", "Karnataka", "B.Com,BBA,BCA", "₹90,000/year", "83%", "https://christuniversity.in", "080-2248-1234"],
    ["Loyola College", "Chennai", "Tamil Nadu", "B.Com,B.Sc", "₹45,000/year", "84%", "https://loyolacollege.edu", "044-1234-5678"],
    ["Hansraj Commerce Campus", "Jaipur", "Rajasthan", "B.Com", "₹30,000/year", "75%", "", ""],
];

/// The demo dataset used until something is uploaded.
pub fn sample() -> Vec<CollegeRecord> {
    SAMPLE
        .iter()
        .map(|[name, city, state, courses, fees, cutoff, website, contact]| CollegeRecord {
            name: s!(*name),
            city: s!(*city),
            state: s!(*state),
            courses: s!(*courses),
            fees: s!(*fees),
            cutoff: s!(*cutoff),
            website: s!(*website),
            contact: s!(*contact),
        })
        .collect()
}
