//! The fixed library of code-pair templates served by the translator.
//!
//! These are hand-written teaching snippets, not generated output. Each one
//! pairs a Python and a JavaScript rendition of the same decision logic with
//! a short explanation of the programming concept it demonstrates.

use crate::domain::{CodeGenerationResult, TemplateKind};

pub struct Template {
    pub python: &'static str,
    pub javascript: &'static str,
    pub explanation: &'static str,
}

impl Template {
    pub fn to_result(&self, kind: TemplateKind) -> CodeGenerationResult {
        CodeGenerationResult {
            template: kind,
            python: self.python.to_string(),
            javascript: self.javascript.to_string(),
            explanation: self.explanation.to_string(),
        }
    }
}

pub fn template(kind: TemplateKind) -> &'static Template {
    match kind {
        TemplateKind::Weather => &WEATHER,
        TemplateKind::Sorting => &SORTING,
        TemplateKind::Meal => &MEAL,
        TemplateKind::Grade => &GRADE,
        TemplateKind::Budget => &BUDGET,
        TemplateKind::Scheduler => &SCHEDULER,
        TemplateKind::Pathfinding => &PATHFINDING,
        TemplateKind::Trading => &TRADING,
        TemplateKind::Inventory => &INVENTORY,
        TemplateKind::Basic => &BASIC,
    }
}

static WEATHER: Template = Template {
    python: r#"def what_to_wear(weather, temperature):
    if weather == "sunny" and temperature > 75:
        return "Light clothes and sunglasses"
    elif weather == "rainy":
        return "Raincoat and umbrella"
    elif temperature < 40:
        return "Heavy coat and warm clothes"
    else:
        return "Comfortable casual wear"

# Example usage
outfit = what_to_wear("sunny", 80)
print(f"You should wear: {outfit}")"#,
    javascript: r#"function whatToWear(weather, temperature) {
    if (weather === "sunny" && temperature > 75) {
        return "Light clothes and sunglasses";
    } else if (weather === "rainy") {
        return "Raincoat and umbrella";
    } else if (temperature < 40) {
        return "Heavy coat and warm clothes";
    } else {
        return "Comfortable casual wear";
    }
}

// Example usage
const outfit = whatToWear("sunny", 80);
console.log(`You should wear: ${outfit}`);"#,
    explanation: "This code uses conditional statements (if/else) to make decisions based on weather conditions and temperature. It demonstrates how real-world decision-making translates to programming logic.",
};

static SORTING: Template = Template {
    python: r#"def sort_books(books, criteria="title"):
    if criteria == "title":
        return sorted(books, key=lambda book: book["title"])
    elif criteria == "author":
        return sorted(books, key=lambda book: book["author"])
    elif criteria == "year":
        return sorted(books, key=lambda book: book["year"])
    else:
        return books

# Example usage
books = [
    {"title": "Python Programming", "author": "Smith", "year": 2020},
    {"title": "JavaScript Basics", "author": "Johnson", "year": 2019},
    {"title": "Data Structures", "author": "Brown", "year": 2021}
]

sorted_books = sort_books(books, "title")
for book in sorted_books:
    print(f"{book['title']} by {book['author']} ({book['year']})")"#,
    javascript: r#"function sortBooks(books, criteria = "title") {
    if (criteria === "title") {
        return books.sort((a, b) => a.title.localeCompare(b.title));
    } else if (criteria === "author") {
        return books.sort((a, b) => a.author.localeCompare(b.author));
    } else if (criteria === "year") {
        return books.sort((a, b) => a.year - b.year);
    } else {
        return books;
    }
}

// Example usage
const books = [
    {title: "Python Programming", author: "Smith", year: 2020},
    {title: "JavaScript Basics", author: "Johnson", year: 2019},
    {title: "Data Structures", author: "Brown", year: 2021}
];

const sortedBooks = sortBooks(books, "title");
sortedBooks.forEach(book => {
    console.log(`${book.title} by ${book.author} (${book.year})`);
});"#,
    explanation: "This code demonstrates sorting algorithms and data structures. It shows how to organize information systematically, which is a fundamental programming concept.",
};

static MEAL: Template = Template {
    python: r#"def suggest_meal(time_of_day, dietary_preferences, ingredients):
    if time_of_day == "morning":
        base_suggestions = ["oatmeal", "eggs", "toast"]
    elif time_of_day == "afternoon":
        base_suggestions = ["sandwich", "salad", "soup"]
    else:  # evening
        base_suggestions = ["pasta", "rice bowl", "stir-fry"]

    # Filter based on dietary preferences
    if "vegetarian" in dietary_preferences:
        base_suggestions = [meal for meal in base_suggestions if meal != "eggs"]

    # Check available ingredients
    available_meals = []
    for meal in base_suggestions:
        if meal in ingredients:
            available_meals.append(meal)

    return available_meals[0] if available_meals else "Order takeout!"

# Example usage
meal = suggest_meal("evening", ["vegetarian"], ["pasta", "rice bowl"])
print(f"Suggested meal: {meal}")"#,
    javascript: r#"function suggestMeal(timeOfDay, dietaryPreferences, ingredients) {
    let baseSuggestions;

    if (timeOfDay === "morning") {
        baseSuggestions = ["oatmeal", "eggs", "toast"];
    } else if (timeOfDay === "afternoon") {
        baseSuggestions = ["sandwich", "salad", "soup"];
    } else { // evening
        baseSuggestions = ["pasta", "rice bowl", "stir-fry"];
    }

    // Filter based on dietary preferences
    if (dietaryPreferences.includes("vegetarian")) {
        baseSuggestions = baseSuggestions.filter(meal => meal !== "eggs");
    }

    // Check available ingredients
    const availableMeals = baseSuggestions.filter(meal =>
        ingredients.includes(meal)
    );

    return availableMeals.length > 0 ? availableMeals[0] : "Order takeout!";
}

// Example usage
const meal = suggestMeal("evening", ["vegetarian"], ["pasta", "rice bowl"]);
console.log(`Suggested meal: ${meal}`);"#,
    explanation: "This code combines multiple decision factors (time, preferences, availability) to make a recommendation. It demonstrates how complex real-world decisions can be broken down into logical steps.",
};

static GRADE: Template = Template {
    python: r#"def calculate_grade(score):
    if score >= 90:
        return "A"
    elif score >= 80:
        return "B"
    elif score >= 70:
        return "C"
    elif score >= 60:
        return "D"
    else:
        return "F"

def get_grade_message(grade):
    messages = {
        "A": "Excellent work!",
        "B": "Good job!",
        "C": "Fair work, keep improving!",
        "D": "Needs improvement",
        "F": "Please see instructor"
    }
    return messages.get(grade, "Invalid grade")

# Example usage
score = 85
grade = calculate_grade(score)
message = get_grade_message(grade)
print(f"Score: {score}, Grade: {grade}, Message: {message}")"#,
    javascript: r#"function calculateGrade(score) {
    if (score >= 90) {
        return "A";
    } else if (score >= 80) {
        return "B";
    } else if (score >= 70) {
        return "C";
    } else if (score >= 60) {
        return "D";
    } else {
        return "F";
    }
}

function getGradeMessage(grade) {
    const messages = {
        "A": "Excellent work!",
        "B": "Good job!",
        "C": "Fair work, keep improving!",
        "D": "Needs improvement",
        "F": "Please see instructor"
    };
    return messages[grade] || "Invalid grade";
}

// Example usage
const score = 85;
const grade = calculateGrade(score);
const message = getGradeMessage(grade);
console.log(`Score: ${score}, Grade: ${grade}, Message: ${message}`);"#,
    explanation: "This code demonstrates range-based decision making and data lookup using dictionaries/objects. It shows how to create reusable functions for common tasks.",
};

static BUDGET: Template = Template {
    python: r#"def summarize_expenses(expenses, monthly_budget):
    totals = {}
    for expense in expenses:
        category = expense["category"]
        totals[category] = totals.get(category, 0) + expense["amount"]

    spent = sum(totals.values())
    if spent > monthly_budget:
        status = "Over budget by " + str(spent - monthly_budget)
    elif spent > monthly_budget * 0.8:
        status = "Close to the limit"
    else:
        status = "On track"

    return totals, status

# Example usage
expenses = [
    {"category": "food", "amount": 320},
    {"category": "transport", "amount": 90},
    {"category": "food", "amount": 45},
    {"category": "entertainment", "amount": 120}
]
totals, status = summarize_expenses(expenses, 600)
print(f"Totals: {totals}, Status: {status}")"#,
    javascript: r#"function summarizeExpenses(expenses, monthlyBudget) {
    const totals = {};
    for (const expense of expenses) {
        const category = expense.category;
        totals[category] = (totals[category] || 0) + expense.amount;
    }

    const spent = Object.values(totals).reduce((sum, value) => sum + value, 0);
    let status;
    if (spent > monthlyBudget) {
        status = "Over budget by " + (spent - monthlyBudget);
    } else if (spent > monthlyBudget * 0.8) {
        status = "Close to the limit";
    } else {
        status = "On track";
    }

    return { totals, status };
}

// Example usage
const expenses = [
    {category: "food", amount: 320},
    {category: "transport", amount: 90},
    {category: "food", amount: 45},
    {category: "entertainment", amount: 120}
];
const { totals, status } = summarizeExpenses(expenses, 600);
console.log(`Totals: ${JSON.stringify(totals)}, Status: ${status}`);"#,
    explanation: "This code groups expenses by category with a dictionary/object, adds up the totals, and compares the sum against a budget with conditional statements. It demonstrates data aggregation, a core skill for processing real-world records.",
};

static SCHEDULER: Template = Template {
    python: r#"def schedule_tasks(tasks, hours_available):
    # Most urgent first, then most important
    ordered = sorted(tasks, key=lambda task: (task["deadline"], -task["importance"]))

    plan = []
    hours_left = hours_available
    for task in ordered:
        if task["hours"] <= hours_left:
            plan.append(task["name"])
            hours_left -= task["hours"]
        else:
            print(f"Postponed: {task['name']}")

    return plan

# Example usage
tasks = [
    {"name": "Write report", "deadline": 1, "importance": 5, "hours": 3},
    {"name": "Email team", "deadline": 1, "importance": 2, "hours": 1},
    {"name": "Plan trip", "deadline": 7, "importance": 3, "hours": 2}
]
print(schedule_tasks(tasks, 5))"#,
    javascript: r#"function scheduleTasks(tasks, hoursAvailable) {
    // Most urgent first, then most important
    const ordered = [...tasks].sort((a, b) =>
        a.deadline - b.deadline || b.importance - a.importance
    );

    const plan = [];
    let hoursLeft = hoursAvailable;
    for (const task of ordered) {
        if (task.hours <= hoursLeft) {
            plan.push(task.name);
            hoursLeft -= task.hours;
        } else {
            console.log(`Postponed: ${task.name}`);
        }
    }

    return plan;
}

// Example usage
const tasks = [
    {name: "Write report", deadline: 1, importance: 5, hours: 3},
    {name: "Email team", deadline: 1, importance: 2, hours: 1},
    {name: "Plan trip", deadline: 7, importance: 3, hours: 2}
];
console.log(scheduleTasks(tasks, 5));"#,
    explanation: "This code orders tasks by deadline and importance, then fills the available time greedily with a loop and a conditional check. It demonstrates priority-based scheduling, the idea behind priority queues and operating system schedulers.",
};

static PATHFINDING: Template = Template {
    python: r#"from collections import deque

def shortest_path(maze, start, goal):
    queue = deque([start])
    came_from = {start: None}

    while queue:
        current = queue.popleft()
        if current == goal:
            break
        row, col = current
        for next_cell in [(row + 1, col), (row - 1, col), (row, col + 1), (row, col - 1)]:
            r, c = next_cell
            if 0 <= r < len(maze) and 0 <= c < len(maze[0]) and maze[r][c] == 0 and next_cell not in came_from:
                came_from[next_cell] = current
                queue.append(next_cell)

    if goal not in came_from:
        return None

    path = []
    cell = goal
    while cell is not None:
        path.append(cell)
        cell = came_from[cell]
    return list(reversed(path))

# Example usage (0 = open, 1 = wall)
maze = [
    [0, 1, 0],
    [0, 0, 0],
    [1, 0, 0]
]
print(shortest_path(maze, (0, 0), (2, 2)))"#,
    javascript: r#"function shortestPath(maze, start, goal) {
    const key = ([r, c]) => `${r},${c}`;
    const queue = [start];
    const cameFrom = new Map([[key(start), null]]);

    while (queue.length > 0) {
        const current = queue.shift();
        if (key(current) === key(goal)) {
            break;
        }
        const [row, col] = current;
        for (const next of [[row + 1, col], [row - 1, col], [row, col + 1], [row, col - 1]]) {
            const [r, c] = next;
            const open = r >= 0 && r < maze.length && c >= 0 && c < maze[0].length && maze[r][c] === 0;
            if (open && !cameFrom.has(key(next))) {
                cameFrom.set(key(next), current);
                queue.push(next);
            }
        }
    }

    if (!cameFrom.has(key(goal))) {
        return null;
    }

    const path = [];
    let cell = goal;
    while (cell !== null) {
        path.push(cell);
        cell = cameFrom.get(key(cell));
    }
    return path.reverse();
}

// Example usage (0 = open, 1 = wall)
const maze = [
    [0, 1, 0],
    [0, 0, 0],
    [1, 0, 0]
];
console.log(shortestPath(maze, [0, 0], [2, 2]));"#,
    explanation: "This code explores the maze one step at a time with a queue (breadth-first search) and remembers where each cell was reached from. Because cells are visited in order of distance, the first time the goal is reached the recorded route is the shortest one.",
};

static TRADING: Template = Template {
    python: r#"def trading_signal(prices, holding, buy_price=None):
    if len(prices) < 5:
        return "hold"

    today = prices[-1]
    average = sum(prices[-5:]) / 5

    if not holding and today < average:
        return "buy"
    elif holding and buy_price is not None and today >= buy_price * 1.10:
        return "sell"
    elif holding and buy_price is not None and today <= buy_price * 0.95:
        return "sell"  # stop loss
    else:
        return "hold"

# Example usage
prices = [101, 99, 100, 102, 96]
print(trading_signal(prices, holding=False))"#,
    javascript: r#"function tradingSignal(prices, holding, buyPrice = null) {
    if (prices.length < 5) {
        return "hold";
    }

    const today = prices[prices.length - 1];
    const average = prices.slice(-5).reduce((sum, p) => sum + p, 0) / 5;

    if (!holding && today < average) {
        return "buy";
    } else if (holding && buyPrice !== null && today >= buyPrice * 1.10) {
        return "sell";
    } else if (holding && buyPrice !== null && today <= buyPrice * 0.95) {
        return "sell"; // stop loss
    } else {
        return "hold";
    }
}

// Example usage
const prices = [101, 99, 100, 102, 96];
console.log(tradingSignal(prices, false));"#,
    explanation: "This code compares today's price with a moving average and with the purchase price to decide whether to buy, sell or hold. It demonstrates threshold rules and state tracking, the building blocks of automated finance systems.",
};

static INVENTORY: Template = Template {
    python: r#"def restock_report(inventory, minimum_levels):
    report = {"ok": [], "low": [], "missing": []}
    for item, minimum in minimum_levels.items():
        count = inventory.get(item, 0)
        if count == 0:
            report["missing"].append(item)
        elif count < minimum:
            report["low"].append(item)
        else:
            report["ok"].append(item)
    return report

# Example usage
inventory = {"potion": 2, "sword": 1, "arrow": 40}
minimum_levels = {"potion": 5, "sword": 1, "arrow": 20, "shield": 1}
print(restock_report(inventory, minimum_levels))"#,
    javascript: r#"function restockReport(inventory, minimumLevels) {
    const report = { ok: [], low: [], missing: [] };
    for (const [item, minimum] of Object.entries(minimumLevels)) {
        const count = inventory[item] || 0;
        if (count === 0) {
            report.missing.push(item);
        } else if (count < minimum) {
            report.low.push(item);
        } else {
            report.ok.push(item);
        }
    }
    return report;
}

// Example usage
const inventory = {potion: 2, sword: 1, arrow: 40};
const minimumLevels = {potion: 5, sword: 1, arrow: 20, shield: 1};
console.log(restockReport(inventory, minimumLevels));"#,
    explanation: "This code walks through every tracked item, looks up how many are in stock, and sorts each item into a group with conditional statements. It demonstrates dictionary lookups and classification, the core of inventory management systems.",
};

static BASIC: Template = Template {
    python: r#"def make_decision(condition):
    if condition:
        return "Yes, proceed with the action"
    else:
        return "No, do not proceed"

# Example usage
result = make_decision(True)
print(f"Decision: {result}")"#,
    javascript: r#"function makeDecision(condition) {
    if (condition) {
        return "Yes, proceed with the action";
    } else {
        return "No, do not proceed";
    }
}

// Example usage
const result = makeDecision(true);
console.log(`Decision: ${result}`);"#,
    explanation: "This is a basic conditional structure that demonstrates how yes/no decisions translate to if/else statements in programming.",
};
