// src/analysis/prompt.rs
use crate::input::ConsumptionInput;

/// Flat rate used for every savings estimate, USD per kWh.
pub const ELECTRICITY_RATE_USD_PER_KWH: f64 = 0.15;

fn consumption_instructions(input: &ConsumptionInput) -> String {
    match input {
        ConsumptionInput::Csv { text } => format!(
            "Analyze the following hourly power consumption data (in kWh) from a smart meter. \
             The data represents one week of usage. Extrapolate to a full month (30 days) for monthly estimates.\n\n\
             CSV Data:\n{}",
            text
        ),
        ConsumptionInput::Image { .. } => "Analyze the electricity bill in the provided image. \
             From the bill, identify the total monthly power consumption in kWh. \
             If the bill shows daily or average usage, extrapolate to a full month (30 days)."
            .to_string(),
    }
}

/// The single instruction sent with every analysis request.
pub fn build_prompt(input: &ConsumptionInput, location: &str) -> String {
    format!(
        "Act as an AI Energy Advisor named E-Power.\n\
         {consumption}\n\n\
         In addition, consider the user's location: \"{location}\".\n\n\
         Based on a complete analysis of both the consumption data and the location, \
         provide a single JSON response containing three distinct sections:\n\
         1. 'applianceAnalysis': Identify the 3 most power-hungry appliances. For each, provide its name, \
         estimated monthly consumption, a recommendation for an efficient replacement, and the potential \
         monthly savings in kWh and USD (assume an electricity rate of ${rate:.2}/kWh).\n\
         2. 'renewableAnalysis': Determine the best renewable option (solar or wind) for the location, \
         generate a 48-hour energy availability forecast, and provide simple recommendations on when to \
         use renewables versus the grid.\n\
         3. 'actionPlan': Create a concise, actionable summary of 3-5 key steps the user should take to \
         reduce their bills and use energy more efficiently, combining insights from both the appliance \
         and renewable analyses.\n",
        consumption = consumption_instructions(input),
        location = location.trim(),
        rate = ELECTRICITY_RATE_USD_PER_KWH,
    )
}
