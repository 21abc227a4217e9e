//! Built-in articles

use super::Post;

const GETTING_STARTED_WITH_REACT: &str = r#"# Getting Started with React

React is a JavaScript library for building user interfaces. Here's what you need to know:

## Core Concepts

1. **Components**: The building blocks of React apps
2. **JSX**: Syntax extension that allows HTML in JavaScript
3. **State**: Data that changes over time in your components
4. **Props**: Passing data between components

## Installation

To create a new React app:

```bash
npx create-react-app my-app
cd my-app
npm start
```

This will start a development server at http://localhost:3000
"#;

const ADVANCED_TYPESCRIPT_PATTERNS: &str = r#"# Advanced TypeScript Patterns

TypeScript brings type safety to JavaScript. Here are some advanced patterns:

## Utility Types

```typescript
type Partial<T> = { [P in keyof T]?: T[P] }
type Readonly<T> = { readonly [P in keyof T]: T[P] }
```

## Conditional Types

```typescript
type NonNullable<T> = T extends null | undefined ? never : T
type Flatten<T> = T extends Array<infer U> ? U : T
```

## Best Practices

1. Use strict mode
2. Prefer interfaces for public API
3. Use type guards
4. Leverage discriminated unions
"#;

const CSS_ARCHITECTURE_WITH_TAILWIND: &str = r#"# CSS Architecture with Tailwind

Tailwind CSS provides utility classes that let you build designs directly in your markup.

## Benefits

- **No naming**: No need to invent class names
- **Consistency**: Design tokens ensure uniformity
- **Performance**: Only generates CSS you actually use

## Example Component

```html
<button class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded">
  Button
</button>
```

## Best Practices

1. Use @apply for repeated utility combinations
2. Extract components for complex UI
3. Customize your design tokens
4. Use plugins for extensions
"#;

/// The three articles shipped with the blog, newest last
pub(super) fn posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            "Getting Started with React",
            "2023-10-15",
            "Learn the fundamentals of React development",
            "5 min read",
            GETTING_STARTED_WITH_REACT,
            &["React", "Frontend", "JavaScript"],
        ),
        Post::new(
            2,
            "Advanced TypeScript Patterns",
            "2023-11-02",
            "Explore powerful TypeScript techniques for better code",
            "8 min read",
            ADVANCED_TYPESCRIPT_PATTERNS,
            &["TypeScript", "Advanced", "Web Development"],
        ),
        Post::new(
            3,
            "CSS Architecture with Tailwind",
            "2023-11-20",
            "Structure your CSS for maintainability at scale",
            "6 min read",
            CSS_ARCHITECTURE_WITH_TAILWIND,
            &["CSS", "Tailwind", "Frontend"],
        ),
    ]
}
