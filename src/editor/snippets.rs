//! Sample source text for each language the playground offers
//!
//! Selecting a language replaces the editor buffer with its snippet.
//! Languages without a snippet get [`PLACEHOLDER`] instead.

/// Buffer contents used when a language has no sample snippet
pub const PLACEHOLDER: &str = "// No sample code available";

/// Languages shown in the language selector, in display order.
/// `plaintext` has no snippet.
pub const SELECTOR_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "html",
    "css",
    "json",
    "rust",
    "go",
    "java",
    "cpp",
    "plaintext",
];

/// Language the editor starts with
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Languages that have a snippet in the catalog
pub fn languages() -> &'static [&'static str] {
    &SELECTOR_LANGUAGES[..SELECTOR_LANGUAGES.len() - 1]
}

/// Look up the sample snippet for a language identifier
pub fn snippet(language: &str) -> Option<&'static str> {
    let text = match language {
        "javascript" => JAVASCRIPT,
        "typescript" => TYPESCRIPT,
        "python" => PYTHON,
        "html" => HTML,
        "css" => CSS,
        "json" => JSON,
        "rust" => RUST,
        "go" => GO,
        "java" => JAVA,
        "cpp" => CPP,
        _ => return None,
    };
    Some(text)
}

/// The snippet for `language`, or [`PLACEHOLDER`] when there is none
pub fn snippet_or_placeholder(language: &str) -> &'static str {
    snippet(language).unwrap_or(PLACEHOLDER)
}

const JAVASCRIPT: &str = r#"// JavaScript Example
function fibonacci(n) {
  if (n <= 1) return n;
  return fibonacci(n - 1) + fibonacci(n - 2);
}

const result = fibonacci(10);
console.log(`Fibonacci(10) = ${result}`);

// Arrow function example
const greet = (name) => {
  return `Hello, ${name}!`;
};"#;

const TYPESCRIPT: &str = r#"// TypeScript Example
interface User {
  id: number;
  name: string;
  email: string;
}

function createUser(name: string, email: string): User {
  return {
    id: Math.floor(Math.random() * 1000),
    name,
    email
  };
}

const user = createUser("Alice", "alice@example.com");
console.log(user);"#;

const PYTHON: &str = r#"# Python Example
def fibonacci(n):
    if n <= 1:
        return n
    return fibonacci(n - 1) + fibonacci(n - 2)

result = fibonacci(10)
print(f"Fibonacci(10) = {result}")

# List comprehension
squares = [x**2 for x in range(10)]
print(squares)"#;

const HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Sample Page</title>
</head>
<body>
  <header>
    <h1>Welcome to My Site</h1>
  </header>
  <main>
    <p>This is a sample HTML document.</p>
  </main>
</body>
</html>"#;

const CSS: &str = r#"/* CSS Example */
:root {
  --primary-color: #3b82f6;
  --secondary-color: #8b5cf6;
}

.container {
  display: flex;
  justify-content: center;
  align-items: center;
  min-height: 100vh;
  background: linear-gradient(135deg, var(--primary-color), var(--secondary-color));
}

.card {
  padding: 2rem;
  border-radius: 1rem;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3);
}"#;

const JSON: &str = r#"{
  "name": "my-project",
  "version": "1.0.0",
  "description": "A sample JSON configuration",
  "dependencies": {
    "react": "^18.2.0",
    "typescript": "^5.0.0"
  },
  "scripts": {
    "dev": "vite",
    "build": "tsc && vite build"
  }
}"#;

const RUST: &str = r#"// Rust Example
fn fibonacci(n: u32) -> u32 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

fn main() {
    let result = fibonacci(10);
    println!("Fibonacci(10) = {}", result);
    
    let numbers: Vec<i32> = (0..10).collect();
    println!("{:?}", numbers);
}"#;

const GO: &str = r#"// Go Example
package main

import "fmt"

func fibonacci(n int) int {
    if n <= 1 {
        return n
    }
    return fibonacci(n-1) + fibonacci(n-2)
}

func main() {
    result := fibonacci(10)
    fmt.Printf("Fibonacci(10) = %d\n", result)
    
    numbers := []int{1, 2, 3, 4, 5}
    fmt.Println(numbers)
}"#;

const JAVA: &str = r#"// Java Example
public class Main {
    public static int fibonacci(int n) {
        if (n <= 1) {
            return n;
        }
        return fibonacci(n - 1) + fibonacci(n - 2);
    }
    
    public static void main(String[] args) {
        int result = fibonacci(10);
        System.out.println("Fibonacci(10) = " + result);
        
        int[] numbers = {1, 2, 3, 4, 5};
        for (int num : numbers) {
            System.out.println(num);
        }
    }
}"#;

const CPP: &str = r#"// C++ Example
#include <iostream>
#include <vector>

int fibonacci(int n) {
    if (n <= 1) {
        return n;
    }
    return fibonacci(n - 1) + fibonacci(n - 2);
}

int main() {
    int result = fibonacci(10);
    std::cout << "Fibonacci(10) = " << result << std::endl;
    
    std::vector<int> numbers = {1, 2, 3, 4, 5};
    for (int num : numbers) {
        std::cout << num << " ";
    }
    return 0;
}"#;
