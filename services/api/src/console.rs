use nutriplan::recommendation::{BmiReport, DietPlanReport, FoodCompatibilityReport};

pub(crate) fn render_plan(report: &DietPlanReport) {
    let profile = &report.user_profile;
    println!("NutriPlan daily plan");
    println!(
        "BMI {:.2} ({}) | blood pressure {} | blood sugar {} | diet quality {}",
        profile.bmi,
        profile.bmi_category,
        profile.blood_pressure,
        profile.blood_sugar_level,
        profile.nutrition_quality
    );

    for (meal, view) in report.diet_plan.iter() {
        let average = view
            .avg_compatibility
            .map(|score| format!("{score:.1}"))
            .unwrap_or_else(|| "n/a".to_string());
        println!(
            "\n{} ({} kcal, avg compatibility {})",
            meal.label(),
            view.total_calories,
            average
        );
        if view.foods.is_empty() {
            println!("  - nothing left in the catalog");
        }
        for food in &view.foods {
            println!(
                "  - {:<32} {:>7.1} kcal  score {:>6.2}",
                food.food_name, food.energy_kcal, food.compatibility_score
            );
        }
    }

    println!(
        "\nDaily total: {} kcal across {} meals (generated {})",
        report.daily_summary.total_calories,
        report.daily_summary.meals_count,
        report.daily_summary.generated_at.to_rfc3339()
    );

    if !report.health_recommendations.is_empty() {
        println!("\nHealth recommendations");
        for advice in &report.health_recommendations {
            println!(
                "  [{:?}] {}: {}",
                advice.priority, advice.title, advice.message
            );
        }
    }
}

pub(crate) fn render_food_score(report: &FoodCompatibilityReport) {
    println!(
        "{} ({:.1} kcal): {:.2} / 100, {}",
        report.food_name, report.energy_kcal, report.compatibility_score, report.recommendation
    );
    for adjustment in &report.adjustments {
        println!(
            "  {:<16} {:>+8.2}",
            adjustment.kind.label(),
            adjustment.amount
        );
    }
}

pub(crate) fn render_bmi(report: &BmiReport) {
    println!(
        "BMI {:.2} ({}) for {} kg at {} cm",
        report.bmi, report.category, report.weight_kg, report.height_cm
    );
}
