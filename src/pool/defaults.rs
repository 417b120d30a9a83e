//! Default phrase catalog.

/// The stock watch-party phrase list a fresh install starts from.
///
/// Carried over verbatim so a reset lands players on the familiar set.
pub const DEFAULT_PHRASES: [&str; 88] = [
    "Traffic stop for expired tags",
    "K-9 unit deployed",
    "Foot chase",
    "Felony warrant hit",
    "Vehicle pursuit called off",
    "Suspect claims it's not their pants",
    "Open container in vehicle",
    "Caller hangs up on dispatch",
    "Argument at gas station",
    "Domestic disturbance (no arrests)",
    "Outstanding warrant discovered",
    "Officer reminds driver to carry insurance",
    "Impounded vehicle",
    "Field sobriety test",
    "Breathalyzer administered",
    "Misdemeanor citation issued",
    "Officer de-escalates tense situation",
    "Bodycam view shifts to another officer",
    "Taser drawn but not used",
    "Backup requested",
    "Found property returned to owner",
    "Informative legal explanation by officer",
    "Dispatch mispronounces street name",
    "Noise complaint",
    "Traffic collision, non-injury",
    "Driver blames GPS",
    "Officer asks: 'Anything illegal in the car?'",
    "Air unit mentioned",
    "Suspect tosses something while running",
    "Consent search of vehicle",
    "Miranda rights read",
    "Passenger has a warrant",
    "Tow truck on scene",
    "Citation for seatbelt",
    "Suspicious person behind a business",
    "Radio goes code silence",
    "Clerk points 'they went that way'",
    "Handcuffs applied without incident",
    "Suspect gives false name",
    "Bike stop",
    "Skateboarder asked to leave property",
    "Open warrant out of another county",
    "Probation search",
    "Stolen vehicle recovered",
    "Shoplifting call",
    "Trespassing warning issued",
    "Neighbors dispute parking",
    "'That's not mine' about backpack",
    "Officer compliments cooperative suspect",
    "Officer says: 'For your safety and mine'",
    "Ambulance staged nearby",
    "Narcan administered",
    "Public intoxication",
    "Citation instead of arrest",
    "Loose dog with animal control called",
    "Missing license plate",
    "Window tint too dark",
    "Air freshener on mirror mentioned",
    "Open carry clarification",
    "Bike without lights at night",
    "Routine pat-down (consent given)",
    "Officer returns wallet found on scene",
    "Victim declines to press charges",
    "Welfare check",
    "Juveniles released to guardian",
    "Fire department requested",
    "Broken tail light",
    "Wrong-way driver corrected",
    "Plate doesn't match vehicle",
    "Expired registration over 6 months",
    "Probable cause explained",
    "Perimeter set up",
    "Spike strips referenced",
    "Cuffed suspect thanks officer",
    "Officer says 'We just want to make sure you're okay'",
    "Bicycle reported stolen",
    "Alleyway search",
    "'I only had two beers'",
    "License suspended",
    "Officer hands out resource card",
    "Dispatch tone-out",
    "Helicopter spotlight",
    "Citation for no proof of insurance",
    "Glass pipe discovered",
    "Vehicle inventory before tow",
    "'Is this being recorded?'",
    "Officer reminds driver to signal",
    "Passenger released on scene",
];
