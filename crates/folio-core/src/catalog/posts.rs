use super::{PostRecord, PostStatus, PublishedDate, StaticCatalog};

/// Posts shown on the home page, in carousel order.
pub const SITE_POSTS: [PostRecord; 6] = [
    PostRecord {
        id: "bias-ai-module",
        title: "Bias in AI: Can Machine Learning Be Truly Fair?",
        author: "Pranjal",
        summary: "As artificial intelligence systems become increasingly integrated into our daily \
lives, the question of algorithmic bias has emerged as a critical concern. This analysis explores \
the forms of bias that can manifest in machine learning models and the ethical implications of AI \
decision-making in hiring, lending, and criminal justice.",
        body_html: "<p>When we think about bias, we can define it simply as discrimination. This \
means favoring one thing over another. But how does bias occur in AI? Is it really possible?</p>\
<p>The answer is YES! It is possible.</p>\
<p>We create various machine learning models to solve our business problems. But have we \
considered how the input data impacts the model? Bias in AI mainly arises from two factors:</p>\
<ul><li>The model's design</li><li>The training data</li></ul>\
<p>Bias can also occur if the model is trained on an excessive amount of data from the same \
group. The AI will identify and analyze the common pattern, and all conclusions will be biased. \
Even small biases can significantly affect a model's performance due to the large scale of \
machine learning.</p>\
<p>Consider Amazon's AI hiring tool. For over ten years the model was trained on data where 90% \
of the resumes were from men, and it learned a pattern that prioritized men over women.</p>\
<p>A study by MIT Media Lab found that facial recognition systems had over a 36% error rate in \
detecting dark-skinned women, because the systems were trained mainly on light-skinned faces.</p>\
<p>So, is machine learning truly fair? The examples above show that it cannot be completely \
fair. AI is created by us, humans. We are the ones feeding and training the data, and giving \
one-sided data to a model is our responsibility.</p>\
<p>If a machine constantly analyzes the same old patterns, it will continue to judge data based \
on the past and struggle to recognize new data.</p>",
        status: PostStatus::Featured,
        published: PublishedDate::new(2024, 2, 15),
    },
    PostRecord {
        id: "automl-module",
        title: "The Rise of Auto ML: Can You Build ML Models Without Coding?",
        author: "Pranjal",
        summary: "Automated Machine Learning (AutoML) is changing the way we approach data science \
and model development. This guide explores how AutoML platforms let non-technical users build \
sophisticated models without writing code, and what that means for data science careers.",
        body_html: "<p>Automated Machine Learning, or AutoML, is transforming how we build \
predictive models. It automates the process of applying machine learning to real-world problems, \
making it accessible to people without extensive data science backgrounds.</p>\
<p>In traditional workflows, data scientists manually select features, choose algorithms, tune \
hyperparameters, and evaluate models. AutoML platforms handle these steps automatically:</p>\
<ol><li>Data preprocessing and feature engineering</li><li>Algorithm selection</li>\
<li>Hyperparameter optimization</li><li>Model evaluation and selection</li>\
<li>Deployment preparation</li></ol>\
<p>Tools like Cloud AutoML, H2O.ai, DataRobot, Auto-Sklearn and TPOT have democratized machine \
learning.</p>\
<p>But does this mean data scientists are becoming obsolete? Not at all. AutoML excels at \
standard problems with clean data, while experienced practitioners remain essential for problem \
framing, messy data, and interpreting results responsibly.</p>",
        status: PostStatus::Published,
        published: PublishedDate::new(2024, 2, 20),
    },
    PostRecord {
        id: "scikit-learn-module",
        title: "How to Build Your First Machine Learning Model Using Scikit-Learn",
        author: "Kapish",
        summary: "A step-by-step guide to building your first machine learning model in Python \
using Scikit-learn, from prerequisites and data loading to training, evaluation, and \
visualization.",
        body_html: "<p>The future belongs to those who learn more skills and combine them in \
creative ways. - Robert Greene</p>\
<p>Machine learning is no longer just a buzzword. From recommendations to self-driving cars, it \
is transforming industries. In this guide we build a first model with Python's Scikit-learn.</p>\
<p><strong>Prerequisites:</strong></p>\
<ul><li>Python 3.x</li><li>Jupyter Notebook or any Python IDE</li>\
<li>Basic understanding of Python (variables, lists, functions)</li></ul>\
<p>Install required packages using pip: \
<code>pip install numpy pandas matplotlib scikit-learn</code></p>\
<p><strong>What is Scikit-Learn?</strong></p>\
<p>Scikit-learn is one of the most widely used machine learning libraries in Python. It is a \
simple and efficient tool for data mining, data analysis, classification, regression and \
clustering.</p>",
        status: PostStatus::Published,
        published: PublishedDate::new(2024, 7, 1),
    },
    PostRecord {
        id: "confusion-matrix-module",
        title: "Understanding Confusion Matrix: Why Accuracy Isn't Everything in Machine Learning",
        author: "Kapish",
        summary: "Learn why accuracy alone can be misleading and how the confusion matrix gives a \
complete picture of your model's performance, with key metrics and examples from healthcare and \
finance.",
        body_html: "<p>When you have created a predictive model and received a high accuracy \
score it can feel as if you've won the lottery. Accuracy is just one measure, and focusing on it \
alone can be misleading.</p>\
<p><strong>Why can accuracy be misleading?</strong></p>\
<p>Imagine a model that predicts whether a patient has a rare disease affecting 1 in 100 people. \
Predicting \"no disease\" for everyone is 99% accurate, and useless.</p>\
<p><strong>What is a Confusion Matrix?</strong></p>\
<p>A confusion matrix breaks predictions into four categories:</p>\
<ul><li><strong>True Positives (TP)</strong></li><li><strong>True Negatives (TN)</strong></li>\
<li><strong>False Positives (FP):</strong> a Type I error</li>\
<li><strong>False Negatives (FN):</strong> a Type II error</li></ul>\
<p>From these counts we derive precision, recall and the F1 score, which tell the full story \
when different errors carry different costs.</p>",
        status: PostStatus::Published,
        published: PublishedDate::new(2024, 7, 2),
    },
    PostRecord {
        id: "ai-healthcare-module",
        title: "How AI Is Revolutionizing Healthcare Diagnostics",
        author: "Tania",
        summary: "AI is transforming healthcare diagnostics, from predicting complex diseases \
before symptoms appear to shortening turnaround times for imaging. This analysis covers current \
applications, benefits, challenges, and the future of AI in medical diagnostics.",
        body_html: "<p><strong>Introduction:</strong></p>\
<p>AI is changing industries, and healthcare is amongst the most impacted. Diagnostics is where \
the change is most visible.</p>\
<p><strong>What is AI, and how does AI work in healthcare?</strong></p>\
<p>Machine learning is the ability of a computer to learn from data without being explicitly \
programmed. AI analyzes medical records, laboratory and imaging results, clinical data, and even \
genetic information.</p>\
<p><strong>Finding Patterns and Trends</strong></p>\
<p>AI identifies connections that humans may miss, which can lead to earlier diagnoses.</p>\
<p><strong>Making Predictive Analyses</strong></p>\
<p>AI can estimate disease risk, whether a treatment may work, and whether a patient may \
experience a complication from surgery.</p>",
        status: PostStatus::Featured,
        published: PublishedDate::new(2024, 4, 15),
    },
    PostRecord {
        id: "ml-datasets-module",
        title: "Top 5 Open Datasets for Practicing Machine Learning",
        author: "Tania",
        summary: "Discover the best open datasets for developing your ML skills, covering climate \
science, AI safety, fake news detection, multimodal learning, and generative AI.",
        body_html: "<p><strong>Introduction: The Role of Data in Machine Learning</strong></p>\
<p>Data drives machine learning model performance. There are hundreds of thousands of open \
datasets to explore, but they aren't made equal.</p>\
<p><strong>The Importance of Open Datasets</strong></p>\
<ul><li>They provide real-world data to train and test ML models.</li>\
<li>They allow you to practice data cleaning, visualization and feature engineering.</li>\
<li>Projects based on open datasets strengthen your portfolio.</li>\
<li>They let you explore healthcare, finance, sports, social media and more.</li></ul>\
<p><strong>Use These Platforms to Find Fresh Datasets</strong></p>\
<ul><li>Hugging Face Datasets Hub</li><li>Google Dataset Search</li>\
<li>Kaggle Trending Datasets</li><li>Awesome Public Datasets GitHub</li></ul>\
<p>Find a dataset that's meaningful to you, examine the data, and build genuine, intelligent \
solutions.</p>",
        status: PostStatus::Published,
        published: PublishedDate::new(2024, 4, 20),
    },
];

pub fn site_catalog() -> StaticCatalog<'static> {
    StaticCatalog::new(&SITE_POSTS)
}
