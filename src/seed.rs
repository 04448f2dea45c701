// src/seed.rs

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

struct SeedQuestion {
    text: &'static str,
    difficulty: &'static str,
    correct_answer_id: &'static str,
    options: [(&'static str, &'static str); 3],
}

/// The cave-science question bank: 6 basic questions (10 points) and
/// 6 advanced questions (20 points), each with one correct option and
/// two distractors.
const QUESTION_BANK: &[SeedQuestion] = &[
    SeedQuestion {
        text: "How are stalactites formed?",
        difficulty: "basic",
        correct_answer_id: "a",
        options: [
            ("a", "Calcium carbonate deposited by dripping groundwater"),
            ("b", "Magma cooling and solidifying"),
            ("c", "Weathering of the cave ceiling"),
        ],
    },
    SeedQuestion {
        text: "Where in a cave do stalagmites usually grow?",
        difficulty: "basic",
        correct_answer_id: "b",
        options: [
            ("a", "The cave ceiling"),
            ("b", "The cave floor"),
            ("c", "The cave walls"),
        ],
    },
    SeedQuestion {
        text: "What forms a stone column?",
        difficulty: "basic",
        correct_answer_id: "c",
        options: [
            ("a", "Earthquake compression"),
            ("b", "Human carving"),
            ("c", "A stalactite and stalagmite joining together"),
        ],
    },
    SeedQuestion {
        text: "Solution caves are carved mainly out of which rock?",
        difficulty: "basic",
        correct_answer_id: "a",
        options: [("a", "Limestone"), ("b", "Granite"), ("c", "Basalt")],
    },
    SeedQuestion {
        text: "Roughly how fast do stalactites grow?",
        difficulty: "basic",
        correct_answer_id: "b",
        options: [
            ("a", "One centimeter per year"),
            ("b", "A few centimeters per century"),
            ("c", "One millimeter per month"),
        ],
    },
    SeedQuestion {
        text: "What causes the dripping sounds commonly heard in caves?",
        difficulty: "basic",
        correct_answer_id: "a",
        options: [
            ("a", "Groundwater dripping from stalactites"),
            ("b", "Underground rivers flowing"),
            ("c", "Rocks knocking together"),
        ],
    },
    SeedQuestion {
        text: "In the chemistry that deposits calcium carbonate into stalactites, what plays the key role?",
        difficulty: "advanced",
        correct_answer_id: "b",
        options: [
            ("a", "Oxidation by oxygen"),
            ("b", "Dissolution and release of carbon dioxide"),
            ("c", "Nitrogen fixation"),
        ],
    },
    SeedQuestion {
        text: "How long does a solution cave take to form?",
        difficulty: "advanced",
        correct_answer_id: "c",
        options: [
            ("a", "Decades"),
            ("b", "A few centuries"),
            ("c", "Tens of thousands to millions of years"),
        ],
    },
    SeedQuestion {
        text: "Why does the temperature inside a cave stay nearly constant?",
        difficulty: "advanced",
        correct_answer_id: "a",
        options: [
            ("a", "Deep underground, insulated from surface weather"),
            ("b", "Continuous geothermal heating"),
            ("c", "Water flow regulating the temperature"),
        ],
    },
    SeedQuestion {
        text: "How do cave \"stone flowers\" form?",
        difficulty: "advanced",
        correct_answer_id: "b",
        options: [
            ("a", "Erosion by flowing water"),
            ("b", "Capillary action and crystallization"),
            ("c", "Accumulated microbes"),
        ],
    },
    SeedQuestion {
        text: "Which province is home to China's largest cave system?",
        difficulty: "advanced",
        correct_answer_id: "c",
        options: [("a", "Yunnan"), ("b", "Sichuan"), ("c", "Guizhou")],
    },
    SeedQuestion {
        text: "How do cave \"stone curtains\" form?",
        difficulty: "advanced",
        correct_answer_id: "a",
        options: [
            ("a", "Calcium carbonate deposited by water flowing down the cave walls"),
            ("b", "Rock peeling away layer by layer"),
            ("c", "Changes in the groundwater level"),
        ],
    },
];

/// Seeds the question bank if the questions table is empty.
/// Questions are immutable after seeding, so an already-populated table is
/// left untouched.
pub async fn seed_questions(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::info!("Question bank already seeded ({} questions)", existing);
        return Ok(());
    }

    let mut tx = pool.begin().await?;

    for question in QUESTION_BANK {
        let question_id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO questions (id, text, difficulty, correct_answer_id, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&question_id)
        .bind(question.text)
        .bind(question.difficulty)
        .bind(question.correct_answer_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        for (option_id, text) in question.options {
            sqlx::query("INSERT INTO options (id, question_id, option_id, text) VALUES (?, ?, ?, ?)")
                .bind(Uuid::new_v4().to_string())
                .bind(&question_id)
                .bind(option_id)
                .bind(text)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    tracing::info!("Seeded {} questions", QUESTION_BANK.len());
    Ok(())
}
