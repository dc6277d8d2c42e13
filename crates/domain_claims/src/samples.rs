//! Bundled FNOL documents covering the common routing outcomes

/// A sample FNOL document with a short title of the case it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDocument {
    pub file_name: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// Property damage well under the fast-track threshold
pub const LOW_VALUE_DAMAGE: SampleDocument = SampleDocument {
    file_name: "sample_1.txt",
    title: "Low-Value Damage",
    text: "FIRST NOTICE OF LOSS (FNOL)
================================

POLICY INFORMATION
------------------
Policy Number: AUTO-2024-78901
Policyholder Name: Sarah Johnson

INCIDENT INFORMATION
--------------------
Incident Date: 02/03/2026
Location: 123 Main Street, Springfield, IL
Description: Minor fender bender in parking lot. Vehicle backing out hit a shopping cart.

ASSET DETAILS
-------------
Estimated Damage: $1,200.00

OTHER INFORMATION
-----------------
Claim Type: Property Damage
",
};

/// Injury claim whose damage alone would qualify for fast-track
pub const PERSONAL_INJURY: SampleDocument = SampleDocument {
    file_name: "sample_2.txt",
    title: "Personal Injury",
    text: "FIRST NOTICE OF LOSS (FNOL)
================================

POLICY INFORMATION
------------------
Policy Number: AUTO-2024-55432
Policyholder Name: Michael Chen

INCIDENT INFORMATION
--------------------
Incident Date: 02/01/2026
Location: Highway 101 Northbound, Mile Marker 45
Description: Rear-end collision. Both drivers complained of neck pain. Airbags deployed.

ASSET DETAILS
-------------
Estimated Damage: $18,500.00

OTHER INFORMATION
-----------------
Claim Type: Personal Injury
",
};

/// Description carrying fraud indicators
pub const POTENTIAL_FRAUD: SampleDocument = SampleDocument {
    file_name: "sample_3.txt",
    title: "Potential Fraud",
    text: "FIRST NOTICE OF LOSS (FNOL)
================================

POLICY INFORMATION
------------------
Policy Number: AUTO-2025-99234
Policyholder Name: Robert Williams

INCIDENT INFORMATION
--------------------
Incident Date: 01/28/2026
Location: Remote parking lot on Oak Street
Description: Witness statements are inconsistent. Damage pattern suggests staged incident.

ASSET DETAILS
-------------
Estimated Damage: $8,900.00

OTHER INFORMATION
-----------------
Claim Type: Property Damage
",
};

/// All bundled samples, in presentation order
pub const ALL: [SampleDocument; 3] = [LOW_VALUE_DAMAGE, PERSONAL_INJURY, POTENTIAL_FRAUD];
