//! Snippet assistant: a second, independent generator that maps logic text
//! to a JavaScript snippet from a small library and adapts it to the
//! requested language with the `transpile` rewrites.
//!
//! Routing mirrors the translator (ordered keyword rules, first hit wins),
//! but it only looks at the logic text and answers with suggestions and a
//! fixed confidence score instead of a Python/JavaScript pair.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::transpile::{convert, TargetLanguage};
use crate::util::{contains_any, fill_template};

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AssistResponse {
  pub code: String,
  pub explanation: String,
  pub suggestions: Vec<String>,
  pub confidence: f32,
}

struct Snippet {
  code: &'static str,
  explanation: &'static str,
  suggestions: [&'static str; 3],
  confidence: f32,
}

impl Snippet {
  fn respond(&self, code: String) -> AssistResponse {
    AssistResponse {
      code,
      explanation: self.explanation.to_string(),
      suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
      confidence: self.confidence,
    }
  }
}

/// Library snippets are adapted to the target language; generic ones are not.
enum Route {
  Library(&'static Snippet),
  Generic(&'static Snippet),
}

static ROUTES: &[(&[&str], Route)] = &[
  (&["weather", "clothing"], Route::Library(&WEATHER_DECISION)),
  (&["book", "organize", "library"], Route::Library(&BOOK_ORGANIZATION)),
  (&["loop", "repeat", "iterate"], Route::Library(&LOOP_EXAMPLE)),
  (&["traffic", "light", "signal"], Route::Library(&TRAFFIC_LIGHT)),
  (&["cart", "shopping", "purchase"], Route::Library(&SHOPPING_CART)),
  (&["temperature", "convert", "celsius"], Route::Library(&TEMPERATURE_CONVERSION)),
  (&["if", "condition"], Route::Generic(&CONDITIONAL)),
  (&["function", "method"], Route::Generic(&FUNCTIONS)),
  (&["array", "list"], Route::Generic(&ARRAYS)),
];

#[derive(Clone, Debug, Default)]
pub struct Assistant;

impl Assistant {
  #[instrument(level = "debug", target = "translator", skip(self, logic), fields(logic_len = logic.len()))]
  pub fn generate(&self, logic: &str, language: TargetLanguage) -> AssistResponse {
    let lower = logic.to_lowercase();
    for (keywords, route) in ROUTES {
      if contains_any(&lower, keywords) {
        return match route {
          Route::Library(s) => {
            debug!(target: "translator", keyword = keywords[0], "Assistant library snippet");
            s.respond(convert(s.code, language))
          }
          Route::Generic(s) => {
            debug!(target: "translator", keyword = keywords[0], "Assistant generic snippet");
            s.respond(s.code.to_string())
          }
        };
      }
    }
    generic_response(logic)
  }

  /// Wrap an existing snippet with the learner's feedback.
  pub fn refine(&self, original_code: &str, feedback: &str) -> AssistResponse {
    let code = format!(
      "// Refined based on feedback: \"{}\"\n{}\n\n// Additional improvements:\n// - Added error handling\n// - Improved readability\n// - Added comments for clarity",
      feedback, original_code
    );
    AssistResponse {
      code,
      explanation: format!("Code refined based on your feedback: {}", feedback),
      suggestions: vec![
        "Test the refined code thoroughly".into(),
        "Consider edge cases".into(),
        "Add unit tests".into(),
      ],
      confidence: 0.85,
    }
  }

  pub fn explain(&self, _code: &str) -> String {
    EXPLANATION.to_string()
  }
}

fn generic_response(logic: &str) -> AssistResponse {
  GENERIC.respond(fill_template(GENERIC.code, &[("logic", logic)]))
}

const EXPLANATION: &str = "This code demonstrates:
1. Function definition and structure
2. Variable declarations and assignments
3. Control flow (if/else statements, loops)
4. Data manipulation and processing
5. Error handling and logging

The code follows best practices for readability and maintainability.";

static WEATHER_DECISION: Snippet = Snippet {
  code: r#"function decideClothing(weather) {
  if (weather === 'sunny') {
    return 'wear light clothes and sunglasses';
  } else if (weather === 'rainy') {
    return 'wear raincoat and carry umbrella';
  } else if (weather === 'cold') {
    return 'wear warm jacket and gloves';
  } else {
    return 'check weather forecast';
  }
}"#,
  explanation: "This function takes weather as input and returns appropriate clothing advice using if-else conditional statements.",
  suggestions: [
    "Add temperature ranges for more precise decisions",
    "Consider seasonal variations",
    "Include indoor/outdoor activity context",
  ],
  confidence: 0.92,
};

static BOOK_ORGANIZATION: Snippet = Snippet {
  code: r#"class BookOrganizer {
  constructor() {
    this.books = [];
  }

  addBook(title, author, genre) {
    this.books.push({ title, author, genre, id: Date.now() });
  }

  organizeByGenre() {
    return this.books.reduce((organized, book) => {
      if (!organized[book.genre]) {
        organized[book.genre] = [];
      }
      organized[book.genre].push(book);
      return organized;
    }, {});
  }

  findBooks(searchTerm) {
    return this.books.filter(book =>
      book.title.toLowerCase().includes(searchTerm.toLowerCase()) ||
      book.author.toLowerCase().includes(searchTerm.toLowerCase())
    );
  }
}"#,
  explanation: "This class provides a complete book organization system with methods to add books, organize by genre, and search functionality.",
  suggestions: [
    "Add sorting by publication date",
    "Implement reading status tracking",
    "Add ISBN validation",
  ],
  confidence: 0.88,
};

static LOOP_EXAMPLE: Snippet = Snippet {
  code: r#"// Print numbers 1 to 10
for (let i = 1; i <= 10; i++) {
  console.log(i);
}

// Alternative with while loop
let counter = 1;
while (counter <= 10) {
  console.log(counter);
  counter++;
}

// Using array methods
const numbers = Array.from({length: 10}, (_, i) => i + 1);
numbers.forEach(num => console.log(num));"#,
  explanation: "Three different approaches to iterate through numbers 1-10: for loop, while loop, and array methods.",
  suggestions: [
    "Consider performance implications",
    "Use forEach for functional programming style",
    "Add break conditions for complex logic",
  ],
  confidence: 0.95,
};

static TRAFFIC_LIGHT: Snippet = Snippet {
  code: r#"function controlTrafficLight(color) {
  switch (color) {
    case 'red':
      return 'Stop';
    case 'yellow':
      return 'Ready';
    case 'green':
      return 'Go';
    default:
      return 'Invalid color';
  }
}"#,
  explanation: "Controls traffic light signals using a switch-case structure.",
  suggestions: [
    "Add pedestrian crossing signals",
    "Implement timers for each state",
    "Connect with actual sensor inputs",
  ],
  confidence: 0.90,
};

static SHOPPING_CART: Snippet = Snippet {
  code: r#"class ShoppingCart {
  constructor() {
    this.items = [];
  }

  addItem(item, price) {
    this.items.push({ item, price });
  }

  removeItem(item) {
    this.items = this.items.filter(i => i.item !== item);
  }

  calculateTotal() {
    return this.items.reduce((total, item) => total + item.price, 0).toFixed(2);
  }
}

// Usage example
const cart = new ShoppingCart();
cart.addItem('Apple', 1.25);
cart.addItem('Banana', 0.75);
cart.removeItem('Apple');
console.log('Total:', cart.calculateTotal());"#,
  explanation: "A simple shopping cart implementation with add, remove, and calculate functionalities.",
  suggestions: [
    "Add discounts and promotions",
    "Include quantity for each item",
    "Connect with payment gateway",
  ],
  confidence: 0.93,
};

static TEMPERATURE_CONVERSION: Snippet = Snippet {
  code: r#"function convertTemperature(value, scale) {
  if (scale === 'C') {
    return (value - 32) * 5/9;
  } else if (scale === 'F') {
    return (value * 9/5) + 32;
  } else {
    return 'Invalid scale';
  }
}

// Example usage
console.log('32F in Celsius:', convertTemperature(32, 'C'));
console.log('0C in Fahrenheit:', convertTemperature(0, 'F'));"#,
  explanation: "Converts temperatures between Celsius and Fahrenheit using if-else logic.",
  suggestions: [
    "Add Kelvin conversion",
    "Include range validations",
    "Formatting results to one decimal place",
  ],
  confidence: 0.89,
};

static CONDITIONAL: Snippet = Snippet {
  code: r#"function makeDecision(condition: boolean) {
  if (condition) {
    // Execute this logic when condition is true
    return "Condition met";
  } else {
    // Execute this logic when condition is false
    return "Condition not met";
  }
}

// Example usage
const result = makeDecision(true);
console.log(result);"#,
  explanation: "Basic conditional logic structure using if-else statements.",
  suggestions: [
    "Add multiple conditions with else if",
    "Consider switch statements for multiple values",
    "Use ternary operator for simple conditions",
  ],
  confidence: 0.85,
};

static FUNCTIONS: Snippet = Snippet {
  code: r#"// Function declaration
function calculateSum(a, b) {
  return a + b;
}

// Arrow function
const multiply = (x, y) => x * y;

// Function with default parameters
function greet(name = "World") {
  return `Hello, ${name}!`;
}

// Example usage
console.log(calculateSum(5, 3));
console.log(multiply(4, 6));
console.log(greet("Alice"));"#,
  explanation: "Different ways to define and use functions in JavaScript.",
  suggestions: [
    "Add parameter validation",
    "Consider async functions for operations that take time",
    "Use JSDoc comments for better documentation",
  ],
  confidence: 0.90,
};

static ARRAYS: Snippet = Snippet {
  code: r#"// Array operations
const numbers = [1, 2, 3, 4, 5];

// Filter even numbers
const evenNumbers = numbers.filter(num => num % 2 === 0);

// Map to double each number
const doubled = numbers.map(num => num * 2);

// Reduce to sum all numbers
const sum = numbers.reduce((acc, num) => acc + num, 0);

// Find specific element
const found = numbers.find(num => num > 3);

console.log('Even numbers:', evenNumbers);
console.log('Doubled:', doubled);
console.log('Sum:', sum);
console.log('First number > 3:', found);"#,
  explanation: "Common array operations including filter, map, reduce, and find methods.",
  suggestions: [
    "Use forEach for side effects",
    "Consider performance for large arrays",
    "Add error handling for empty arrays",
  ],
  confidence: 0.88,
};

static GENERIC: Snippet = Snippet {
  code: r#"// Generated code based on your logic: "{logic}"
function processLogic() {
  // Implement your specific logic here
  console.log("Processing: {logic}");

  // Example structure
  try {
    // Your main logic implementation
    const result = performOperation();
    return result;
  } catch (error) {
    console.error('Error processing logic:', error);
    return null;
  }
}

function performOperation() {
  // Placeholder for your specific operation
  return "Operation completed";
}

// Execute the logic
const result = processLogic();
console.log('Result:', result);"#,
  explanation: "Generic code structure that can be adapted for your specific logic requirements.",
  suggestions: [
    "Replace placeholder functions with actual implementation",
    "Add specific error handling for your use case",
    "Consider breaking down complex logic into smaller functions",
  ],
  confidence: 0.70,
};
