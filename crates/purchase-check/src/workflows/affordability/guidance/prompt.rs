use serde_json::{Map, Number, Value};

use super::super::domain::{FinancialMetrics, HouseholdProfile, PaymentTerms};

/// Values handed to the advisory generator for a single simulation.
///
/// `values` merges the profile fields with the computed metrics under flat
/// snake_case keys; `goal_plan` is only present when the household supplied at
/// least one goal field.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptContext {
    values: Map<String, Value>,
    goal_plan: Option<String>,
}

impl PromptContext {
    pub fn assemble(profile: &HouseholdProfile, metrics: &FinancialMetrics) -> Self {
        let mut values = Map::new();
        insert_amount(&mut values, "monthly_income", profile.monthly_income);
        insert_amount(&mut values, "rent", profile.fixed_costs.rent);
        insert_amount(&mut values, "utilities", profile.fixed_costs.utilities);
        insert_amount(
            &mut values,
            "subscriptions_insurance",
            profile.fixed_costs.subscriptions_insurance,
        );
        insert_amount(&mut values, "existing_loans", profile.existing_loans);
        insert_amount(&mut values, "variable_expenses", profile.variable_expenses);
        insert_amount(&mut values, "current_savings", profile.current_savings);
        values.insert("dependents".to_string(), Value::from(profile.dependents));
        values.insert(
            "household_responsibility".to_string(),
            Value::from(profile.household_responsibility.label()),
        );
        values.insert(
            "income_stability".to_string(),
            Value::from(profile.income_stability.label()),
        );
        values.insert(
            "risk_tolerance".to_string(),
            Value::from(profile.risk_tolerance.label()),
        );
        insert_amount(&mut values, "purchase_amount", profile.purchase_amount);
        values.insert(
            "payment_type".to_string(),
            Value::from(profile.payment.payment_type().as_str()),
        );
        if let PaymentTerms::Loan {
            duration_months,
            annual_interest_rate,
        } = profile.payment
        {
            values.insert("loan_duration".to_string(), Value::from(duration_months));
            insert_amount(&mut values, "interest_rate", annual_interest_rate);
        }

        if let Ok(Value::Object(metric_fields)) = serde_json::to_value(metrics) {
            values.extend(metric_fields);
        }

        Self {
            values,
            goal_plan: goal_plan_block(profile),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn goal_plan(&self) -> Option<&str> {
        self.goal_plan.as_deref()
    }

    /// Renders the instruction sent to the generative model.
    pub fn render_prompt(&self) -> String {
        let mut prompt = String::from("You are a conservative financial advisor.\n\n");

        prompt.push_str("User Profile:\n");
        for (label, key) in [
            ("Income", "monthly_income"),
            ("Dependents", "dependents"),
            ("Household Responsibility", "household_responsibility"),
            ("Income Stability", "income_stability"),
            ("Risk Tolerance", "risk_tolerance"),
            ("Purchase Amount", "purchase_amount"),
            ("Payment Type", "payment_type"),
            ("Loan Duration (months)", "loan_duration"),
            ("Interest Rate (%)", "interest_rate"),
        ] {
            self.push_line(&mut prompt, label, key);
        }

        prompt.push_str("\nFinancial Results:\n");
        for (label, key) in [
            ("Risk Level", "risk_level"),
            ("Disposable Income Before Purchase", "baseline_disposable_income"),
            ("Disposable Income After Purchase", "new_disposable_income"),
            ("Savings After Purchase", "savings_after_purchase"),
            ("Emergency Buffer Needed", "emergency_buffer"),
            ("Monthly Payment", "monthly_payment"),
            ("Recovery Months", "recovery_months"),
        ] {
            self.push_line(&mut prompt, label, key);
        }

        if let Some(goal_plan) = &self.goal_plan {
            prompt.push('\n');
            prompt.push_str(goal_plan);
            prompt.push('\n');
        }

        prompt.push_str(
            "\nExplain:\n\
             1. Why this is SAFE, TIGHT or RISKY.\n\
             2. Long-term impact.\n\
             3. Safer alternative if risky.\n\n\
             Keep response concise and practical.\n\
             Respond with a single JSON object and nothing else, shaped as:\n\
             {\"guidance\": \"<short paragraph>\", \
             \"key_insights\": [{\"title\": \"<short title>\", \"detail\": \"<one or two sentences>\"}], \
             \"safer_alternatives\": [\"<alternative>\"]}\n\
             Provide 2 to 4 key insights.\n",
        );

        prompt
    }

    fn push_line(&self, prompt: &mut String, label: &str, key: &str) {
        if let Some(value) = self.values.get(key) {
            prompt.push_str(label);
            prompt.push_str(": ");
            match value {
                Value::String(text) => prompt.push_str(text),
                Value::Number(number) => match number.as_f64() {
                    Some(float) if number.is_f64() => prompt.push_str(&format!("{float:.2}")),
                    _ => prompt.push_str(&number.to_string()),
                },
                other => prompt.push_str(&other.to_string()),
            }
            prompt.push('\n');
        }
    }
}

fn insert_amount(values: &mut Map<String, Value>, key: &str, amount: f64) {
    if let Some(number) = Number::from_f64(amount) {
        values.insert(key.to_string(), Value::Number(number));
    }
}

/// One labeled line per supplied goal field; `None` when nothing was supplied.
fn goal_plan_block(profile: &HouseholdProfile) -> Option<String> {
    let goal = &profile.goal;
    let mut lines = Vec::new();

    if let Some(name) = goal.plan_name.as_deref().filter(|name| !name.trim().is_empty()) {
        lines.push(format!("Plan Name: {}", name.trim()));
    }
    if let Some(amount) = goal.target_amount {
        lines.push(format!("Target Amount: {amount:.2}"));
    }
    if let Some(date) = goal.target_date {
        lines.push(format!("Target Date: {}", date.format("%Y-%m-%d")));
    }
    if let Some(description) = goal
        .goal_description
        .as_deref()
        .filter(|description| !description.trim().is_empty())
    {
        lines.push(format!("Goal Description: {}", description.trim()));
    }

    if lines.is_empty() {
        None
    } else {
        Some(format!("Goal Plan:\n{}", lines.join("\n")))
    }
}
